pub mod artists;
pub mod dashboard;
pub mod home;
pub mod onboarding;

pub use artists::artists_page;
pub use dashboard::dashboard_page;
pub use home::home_page;
pub use onboarding::{onboarding_page, onboarding_success_page};
