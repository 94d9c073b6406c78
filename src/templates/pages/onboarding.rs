// templates/pages/onboarding.rs

use crate::onboarding::form::{
    FieldError, OnboardingForm, CATEGORY_CHOICES, FEE_RANGE_CHOICES, LANGUAGE_CHOICES,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn onboarding_page(form: &OnboardingForm, errors: &[FieldError]) -> Markup {
    desktop_layout(
        "Onboard Your Artist",
        html! {
            main class="container" {
                h1 { "Onboard Your Artist" }

                form action="/onboarding" method="post" {
                    div {
                        label for="name" { "Name" }
                        input id="name" name="name" type="text" value=(form.name);
                        (field_error(errors, "name"))
                    }

                    div {
                        label for="bio" { "Bio" }
                        textarea id="bio" name="bio" rows="4" { (form.bio) }
                        (field_error(errors, "bio"))
                    }

                    div {
                        label { "Categories" }
                        @for choice in CATEGORY_CHOICES {
                            div {
                                input type="checkbox" name="categories"
                                    id=(format!("category-{choice}")) value=(choice)
                                    checked[form.categories.iter().any(|c| c == choice)];
                                label for=(format!("category-{choice}")) { (choice) }
                            }
                        }
                        (field_error(errors, "categories"))
                    }

                    div {
                        label { "Languages" }
                        @for choice in LANGUAGE_CHOICES {
                            div {
                                input type="checkbox" name="languages"
                                    id=(format!("language-{choice}")) value=(choice)
                                    checked[form.languages.iter().any(|l| l == choice)];
                                label for=(format!("language-{choice}")) { (choice) }
                            }
                        }
                        (field_error(errors, "languages"))
                    }

                    div {
                        label for="fee_range" { "Fee Range" }
                        select id="fee_range" name="fee_range" {
                            option value="" selected[form.fee_range.is_empty()] {
                                "Select fee range"
                            }
                            @for choice in FEE_RANGE_CHOICES {
                                option value=(choice) selected[form.fee_range == choice] {
                                    (choice)
                                }
                            }
                        }
                        (field_error(errors, "fee_range"))
                    }

                    div {
                        label for="location" { "Location" }
                        input id="location" name="location" type="text" value=(form.location);
                        (field_error(errors, "location"))
                    }

                    button type="submit" { "Submit" }
                }
            }
        },
    )
}

pub fn onboarding_success_page(name: &str) -> Markup {
    desktop_layout(
        "Submission received",
        html! {
            main class="container" {
                h1 { "Artist submitted successfully!" }
                p { "Thanks — " strong { (name) } " is in the review queue." }
                p { a href="/artists" { "Browse artists" } }
            }
        },
    )
}

fn field_error(errors: &[FieldError], field: &str) -> Markup {
    html! {
        @if let Some(err) = errors.iter().find(|e| e.field == field) {
            p class="field-error" { (err.message) }
        }
    }
}
