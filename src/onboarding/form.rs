// src/onboarding/form.rs

use url::form_urlencoded;

pub const CATEGORY_CHOICES: [&str; 4] = ["Singer", "Dancer", "DJ", "Speaker"];
pub const LANGUAGE_CHOICES: [&str; 4] = ["English", "Spanish", "French", "Hindi"];
pub const FEE_RANGE_CHOICES: [&str; 3] = ["$0–$500", "$500–$1000", "$1000+"];

/// Raw onboarding submission, exactly as the artist typed it. Kept
/// around even when invalid so the form can be re-rendered filled in.
#[derive(Debug, Default, Clone)]
pub struct OnboardingForm {
    pub name: String,
    pub bio: String,
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    pub fee_range: String,
    pub location: String,
}

/// Parses an `application/x-www-form-urlencoded` body. The checkbox
/// groups arrive as repeated keys (`categories=Singer&categories=DJ`).
/// Unknown keys are ignored; parsing never fails.
pub fn parse_form(body: &str) -> OnboardingForm {
    let mut form = OnboardingForm::default();

    for (key, value) in form_urlencoded::parse(body.as_bytes()) {
        match key.as_ref() {
            "name" => form.name = value.into_owned(),
            "bio" => form.bio = value.into_owned(),
            "categories" => form.categories.push(value.into_owned()),
            "languages" => form.languages.push(value.into_owned()),
            "fee_range" => form.fee_range = value.into_owned(),
            "location" => form.location = value.into_owned(),
            _ => {}
        }
    }

    form
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        FieldError { field, message }
    }
}

/// Checks every field and returns all problems at once, so the form
/// can show them together. Empty vec means the submission is good.
pub fn validate(form: &OnboardingForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.name.is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    } else if form.name.chars().count() < 2 {
        errors.push(FieldError::new("name", "Name must be at least 2 characters"));
    }

    if form.bio.is_empty() {
        errors.push(FieldError::new("bio", "Bio is required"));
    } else if form.bio.chars().count() > 500 {
        errors.push(FieldError::new("bio", "Bio must be 500 characters or less"));
    }

    if form.categories.is_empty() {
        errors.push(FieldError::new("categories", "Select at least one category"));
    }

    if form.languages.is_empty() {
        errors.push(FieldError::new("languages", "Select at least one language"));
    }

    if form.fee_range.is_empty() {
        errors.push(FieldError::new("fee_range", "Fee range is required"));
    }

    if form.location.is_empty() {
        errors.push(FieldError::new("location", "Location is required"));
    } else if form.location.chars().count() < 2 {
        errors.push(FieldError::new(
            "location",
            "Location must be at least 2 characters",
        ));
    }

    errors
}
