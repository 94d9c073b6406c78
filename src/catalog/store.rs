// src/catalog/store.rs

use crate::catalog::models::{Artist, Category, Submission};
use crate::errors::ServerError;
use std::collections::HashSet;

const ARTISTS_JSON: &str = include_str!("../../data/artists.json");
const CATEGORIES_JSON: &str = include_str!("../../data/categories.json");
const SUBMISSIONS_JSON: &str = include_str!("../../data/submissions.json");

/// The immutable data snapshot the whole app serves from. Built once
/// at startup, before the first request; handlers only ever borrow it.
pub struct Catalog {
    pub artists: Vec<Artist>,
    pub categories: Vec<Category>,
    pub submissions: Vec<Submission>,
}

/// Parse the embedded JSON fixtures into a complete catalog.
///
/// Artist ids must be unique — the rest of the app keys on them, so a
/// duplicate is a data bug we refuse to serve rather than paper over.
pub fn load_catalog() -> Result<Catalog, ServerError> {
    let artists: Vec<Artist> = serde_json::from_str(ARTISTS_JSON)
        .map_err(|e| ServerError::DataError(format!("artists.json: {e}")))?;

    let mut seen = HashSet::new();
    for artist in &artists {
        if !seen.insert(artist.id) {
            return Err(ServerError::DataError(format!(
                "artists.json: duplicate artist id {}",
                artist.id
            )));
        }
    }

    let categories: Vec<Category> = serde_json::from_str(CATEGORIES_JSON)
        .map_err(|e| ServerError::DataError(format!("categories.json: {e}")))?;

    let submissions: Vec<Submission> = serde_json::from_str(SUBMISSIONS_JSON)
        .map_err(|e| ServerError::DataError(format!("submissions.json: {e}")))?;

    Ok(Catalog {
        artists,
        categories,
        submissions,
    })
}
