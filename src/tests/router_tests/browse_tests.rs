// src/tests/router_tests/browse_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_catalog};

#[test]
fn home_page_lists_categories() {
    let catalog = test_catalog();

    let mut resp = handle(get("/"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Explore Categories"));
    assert!(body.contains("Singer"));
    assert!(body.contains("Speaker"));
}

#[test]
fn browse_without_filters_shows_whole_catalog() {
    let catalog = test_catalog();

    let mut resp = handle(get("/artists"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Aria Bennett"));
    // malformed records render too, with placeholders
    assert!(body.contains("Hana Sato"));
    assert!(body.contains("12 artists"));
}

#[test]
fn browse_filters_by_category() {
    let catalog = test_catalog();

    let mut resp = handle(get("/artists?category=DJ"), &catalog).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("DJ Meera"));
    assert!(body.contains("DJ Atlas"));
    assert!(body.contains("Tomás Rivera"));
    assert!(!body.contains("Aria Bennett"));
    // Mumbai, Austin, and the missing-location bucket
    assert!(body.contains("3 artists"));
    assert!(body.contains("from $250"));
}

#[test]
fn browse_search_is_case_insensitive_and_decoded() {
    let catalog = test_catalog();

    let mut resp = handle(get("/artists?search=nyc"), &catalog).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Aria Bennett"));
    assert!(body.contains("Elise Moreau"));
    assert!(!body.contains("DJ Meera"));
}

#[test]
fn browse_sorts_by_price() {
    let catalog = test_catalog();

    let mut resp = handle(get("/artists?category=Singer&sort=price-low"), &catalog).unwrap();
    let body = body_string(&mut resp);

    // Singers by lower-bound price: Aria 500, Elise 500 (catalog order
    // breaks the tie), Marlow 750, Violet 800.
    let aria = body.find("Aria Bennett").unwrap();
    let elise = body.find("Elise Moreau").unwrap();
    let marlow = body.find("The Marlow Trio").unwrap();
    let violet = body.find("Violet &amp; The Vandals").unwrap();
    assert!(aria < elise && elise < marlow && marlow < violet);
}

#[test]
fn browse_with_no_matches_says_so() {
    let catalog = test_catalog();

    let mut resp = handle(get("/artists?search=zanzibar"), &catalog).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("No artists found."));
    assert!(body.contains("0 artists"));
}

#[test]
fn browse_survives_mangled_parameters() {
    let catalog = test_catalog();

    // junk numbers and an unknown sort key fall back to defaults
    let mut resp = handle(
        get("/artists?min_price=abc&max_price=-5&sort=nonsense"),
        &catalog,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("12 artists"));
}

#[test]
fn dashboard_lists_submissions() {
    let catalog = test_catalog();

    let mut resp = handle(get("/dashboard"), &catalog).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Rohan Kapoor"));
    assert!(body.contains("Sadie Blum"));
}

#[test]
fn unknown_route_is_not_found() {
    let catalog = test_catalog();

    match handle(get("/no-such-page"), &catalog) {
        Err(ServerError::NotFound) => {}
        Err(other) => panic!("expected NotFound, got {other:?}"),
        Ok(_) => panic!("expected NotFound, got a page"),
    }
}
