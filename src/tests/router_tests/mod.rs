pub mod browse_tests;
pub mod onboarding_tests;
