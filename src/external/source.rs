// ABOUTME: RecipeSource trait plus an in-memory/file-backed implementation
// ABOUTME: Static sources back offline CLI runs and catalog tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::RawRecipe;
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::path::Path;
use tracing::debug;

/// Anything that can produce a batch of raw recipe records
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Fetch one batch of raw records
    ///
    /// # Errors
    ///
    /// Returns an error when the records cannot be retrieved or decoded
    async fn fetch_recipes(&self) -> AppResult<Vec<RawRecipe>>;
}

/// A fixed set of raw records, optionally read from a JSON document
///
/// Accepts either a search response object (`{"results": [...]}`) or a bare
/// array of records.
#[derive(Debug, Clone)]
pub struct StaticRecipeSource {
    name: String,
    records: Vec<RawRecipe>,
}

impl StaticRecipeSource {
    /// Wrap records already in memory
    #[must_use]
    pub fn new(name: impl Into<String>, records: Vec<RawRecipe>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// Parse a JSON document
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the document is not JSON or has no record array
    pub fn from_json_str(name: impl Into<String>, json: &str) -> AppResult<Self> {
        let name = name.into();
        let document: JsonValue = serde_json::from_str(json).map_err(|e| {
            AppError::new(
                ErrorCode::InvalidFormat,
                format!("{name}: invalid JSON: {e}"),
            )
        })?;

        let records = match document {
            JsonValue::Array(items) => items,
            JsonValue::Object(mut object) => match object.remove("results") {
                Some(JsonValue::Array(items)) => items,
                _ => {
                    return Err(AppError::new(
                        ErrorCode::InvalidFormat,
                        format!("{name}: expected a \"results\" array"),
                    ))
                }
            },
            _ => {
                return Err(AppError::new(
                    ErrorCode::InvalidFormat,
                    format!("{name}: expected an array or a search response object"),
                ))
            }
        };

        debug!(source = %name, records = records.len(), "Parsed static recipe document");
        Ok(Self::new(name, records.into_iter().map(RawRecipe::new).collect()))
    }

    /// Read and parse a JSON file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be read, or `InvalidFormat` per [`Self::from_json_str`]
    pub async fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::storage(format!("cannot read {}: {e}", path.display())).with_source(e)
        })?;
        Self::from_json_str(path.display().to_string(), &contents)
    }

    /// Number of records held
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records are held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecipeSource for StaticRecipeSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_recipes(&self) -> AppResult<Vec<RawRecipe>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_accepts_search_response_and_bare_array() {
        let wrapped = StaticRecipeSource::from_json_str(
            "wrapped",
            r#"{"results":[{"title":"A"}],"totalResults":1}"#,
        )
        .unwrap();
        assert_eq!(wrapped.len(), 1);

        let bare =
            StaticRecipeSource::from_json_str("bare", r#"[{"title":"A"},{"title":"B"}]"#).unwrap();
        assert_eq!(bare.len(), 2);
    }

    #[test]
    fn test_rejects_documents_without_records() {
        let err = StaticRecipeSource::from_json_str("x", r#"{"results": 3}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        let err = StaticRecipeSource::from_json_str("x", "not json").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }
}
