// src/tests/router_tests/onboarding_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, test_catalog};

#[test]
fn onboarding_form_renders() {
    let catalog = test_catalog();

    let mut resp = handle(get("/onboarding"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Onboard Your Artist"));
    assert!(body.contains("Fee Range"));
}

#[test]
fn valid_submission_shows_success_page() {
    let catalog = test_catalog();

    let body = "name=Nina+Rae&bio=Jazz+and+soul+vocalist.&categories=Singer\
                &languages=English&fee_range=%241000%2B&location=Austin";
    let mut resp = handle(post_form("/onboarding", body), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let html = body_string(&mut resp);
    assert!(html.contains("Artist submitted successfully!"));
    assert!(html.contains("Nina Rae"));
}

#[test]
fn invalid_submission_rerenders_with_errors_and_kept_values() {
    let catalog = test_catalog();

    // no categories ticked, name too short
    let body = "name=N&bio=Jazz+singer&languages=English\
                &fee_range=%241000%2B&location=Austin";
    let mut resp = handle(post_form("/onboarding", body), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let html = body_string(&mut resp);
    assert!(html.contains("Name must be at least 2 characters"));
    assert!(html.contains("Select at least one category"));
    // the rest of what the artist typed survives the round trip
    assert!(html.contains("Jazz singer"));
    assert!(html.contains("Austin"));
}
