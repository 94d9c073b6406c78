pub mod form;

pub use form::{parse_form, validate, FieldError, OnboardingForm};
