// src/catalog/models.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// artist
//  ├── id            (unique across the catalog)
//  ├── name
//  ├── category      ── may be missing on malformed records
//  ├── location      ── may be missing on malformed records
//  ├── priceRange    ── raw text, e.g. "$500-$1000" or "₹20,000-₹50,000"
//  ├── rating        ── 0..=5, optional
//  └── languages / bio / image ── display-only

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub price_range: Option<String>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub fee: String,
    pub submitted_at: NaiveDate,
}
