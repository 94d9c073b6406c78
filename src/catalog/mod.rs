pub mod models;
pub mod store;

pub use store::{load_catalog, Catalog};
