use crate::catalog::models::Artist;
use crate::catalog::{load_catalog, Catalog};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// Shorthand for building artist records in tests, malformed ones
/// included.
pub fn artist(
    id: i64,
    name: &str,
    category: Option<&str>,
    location: Option<&str>,
    price_range: Option<&str>,
    rating: Option<f64>,
) -> Artist {
    Artist {
        id,
        name: name.to_string(),
        category: category.map(String::from),
        location: location.map(String::from),
        price_range: price_range.map(String::from),
        rating,
        languages: Vec::new(),
        bio: None,
        image: None,
    }
}

/// The real embedded catalog, as production loads it.
pub fn test_catalog() -> Catalog {
    load_catalog().expect("embedded catalog should load")
}

pub fn get(path: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::from(String::new()))
        .unwrap()
}

pub fn post_form(path: &str, body: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("response body should be readable");
    String::from_utf8(bytes).expect("response body should be UTF-8")
}
