//! Dish catalog import files.
//!
//! The catalog is maintained outside the app and loaded with
//! `receptai-server --import-dishes <file>`. This is the data-entry boundary
//! for difficulty values: a file with an unknown tier is rejected as a whole.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::types::Difficulty;

/// One entry of a catalog file as written by hand.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub id: Option<i32>,
    pub title: String,
    pub ingredients: Vec<String>,
    pub difficulty: String,
}

/// A catalog entry that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDish {
    pub id: Option<i32>,
    pub title: String,
    pub ingredients: Vec<String>,
    pub difficulty: Difficulty,
}

pub fn load_catalog_file(path: &Path) -> Result<Vec<ValidDish>, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content)
}

pub fn parse_catalog(json: &str) -> Result<Vec<ValidDish>, CatalogError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
    validate_catalog(entries)
}

pub fn validate_catalog(entries: Vec<CatalogEntry>) -> Result<Vec<ValidDish>, CatalogError> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let title = entry.title.trim().to_string();
            if title.is_empty() {
                return Err(CatalogError::EmptyTitle { index });
            }

            let difficulty = entry.difficulty.parse::<Difficulty>().map_err(|e| {
                CatalogError::InvalidDifficulty {
                    index,
                    title: title.clone(),
                    value: e.0,
                }
            })?;

            Ok(ValidDish {
                id: entry.id,
                title,
                ingredients: entry.ingredients,
                difficulty,
            })
        })
        .collect()
}
