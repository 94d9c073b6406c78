pub mod cards;
pub mod error;
pub mod filter_block;

pub use cards::{artist_card, category_card};
pub use error::error_page;
pub use filter_block::filter_block;
