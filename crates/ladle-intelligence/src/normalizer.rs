// ABOUTME: Recipe record normalizer turning untrusted API records into validated Recipes
// ABOUTME: Only a missing or blank title invalidates a record; other fields degrade to absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe record normalization
//!
//! Field rules:
//!
//! - `title` must be a non-blank string, otherwise the record is invalid.
//!   A whitespace-only title counts as blank, so `"  "` is rejected rather
//!   than kept as a nameless recipe.
//! - `cuisines` / `diets` are read only when they are JSON arrays; any other
//!   shape means "no labels known". Non-string elements are skipped.
//! - `nutrition.nutrients`: the first entry with a given `name` decides that
//!   nutrient. A non-numeric, negative or non-finite amount leaves it absent.
//! - `healthScore`, `readyInMinutes`, `servings` accept non-negative numbers
//!   (fractional values are truncated, so `69.6` stays below a threshold of
//!   `70`); anything else is absent.

use ladle_core::models::{
    LabelSet, NutrientAmount, Nutrients, RawRecipe, Recipe, RecipeId, UntrustedHtml,
};
use serde_json::Value as JsonValue;
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

/// Why a raw record could not become a [`Recipe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRecipe {
    /// Record is null or not a JSON object
    #[error("record is not a JSON object")]
    NotAnObject,
    /// No `title` field
    #[error("record has no title")]
    MissingTitle,
    /// `title` is present but not a string
    #[error("record title is not text")]
    TitleNotText,
    /// `title` is empty or whitespace
    #[error("record title is blank")]
    BlankTitle,
}

/// A record dropped during batch normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Position of the record in the source sequence
    pub index: usize,
    /// Reason it was rejected
    pub reason: InvalidRecipe,
}

/// Output of [`normalize_batch`]
#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    /// Valid recipes in source order
    pub recipes: Vec<Recipe>,
    /// Records that failed validation
    pub rejected: Vec<Rejection>,
}

/// Normalize one raw record.
///
/// # Errors
///
/// Returns [`InvalidRecipe`] when the record is not an object or has no usable title.
pub fn normalize(raw: &RawRecipe) -> Result<Recipe, InvalidRecipe> {
    if !raw.is_object() {
        return Err(InvalidRecipe::NotAnObject);
    }

    let title = match raw.field("title") {
        None | Some(JsonValue::Null) => return Err(InvalidRecipe::MissingTitle),
        Some(JsonValue::String(title)) if title.trim().is_empty() => {
            return Err(InvalidRecipe::BlankTitle)
        }
        Some(JsonValue::String(title)) => title.clone(),
        Some(_) => return Err(InvalidRecipe::TitleNotText),
    };

    Ok(Recipe {
        id: raw.field("id").and_then(recipe_id),
        title,
        cuisines: labels(raw.field("cuisines")),
        diets: labels(raw.field("diets")),
        health_score: raw.field("healthScore").and_then(non_negative_integer),
        nutrients: nutrients(raw.path(&["nutrition", "nutrients"])),
        image: raw
            .field("image")
            .and_then(JsonValue::as_str)
            .filter(|url| !url.is_empty())
            .map(ToOwned::to_owned),
        ready_in_minutes: raw.field("readyInMinutes").and_then(non_negative_integer),
        servings: raw.field("servings").and_then(non_negative_integer),
        summary: raw
            .field("summary")
            .and_then(JsonValue::as_str)
            .map(UntrustedHtml::new),
    })
}

/// Normalize a sequence of raw records, keeping valid ones in order
pub fn normalize_batch<'a, I>(raws: I) -> NormalizedBatch
where
    I: IntoIterator<Item = &'a RawRecipe>,
{
    let mut batch = NormalizedBatch::default();
    for (index, raw) in raws.into_iter().enumerate() {
        match normalize(raw) {
            Ok(recipe) => batch.recipes.push(recipe),
            Err(reason) => {
                debug!(record.index = index, reason = %reason, "Discarding malformed recipe record");
                batch.rejected.push(Rejection { index, reason });
            }
        }
    }
    batch
}

fn recipe_id(value: &JsonValue) -> Option<RecipeId> {
    value.as_u64()
}

fn non_negative_integer(value: &JsonValue) -> Option<u32> {
    if let Some(integer) = value.as_u64() {
        return u32::try_from(integer).ok();
    }
    value
        .as_f64()
        .filter(|number| number.is_finite() && *number >= 0.0 && *number <= f64::from(u32::MAX))
        .map(|number| number.floor() as u32)
}

fn labels(value: Option<&JsonValue>) -> LabelSet {
    value
        .and_then(JsonValue::as_array)
        .map(|items| LabelSet::from_labels(items.iter().filter_map(JsonValue::as_str)))
        .unwrap_or_default()
}

fn nutrients(value: Option<&JsonValue>) -> Nutrients {
    let mut nutrients = Nutrients::default();
    let Some(entries) = value.and_then(JsonValue::as_array) else {
        return nutrients;
    };

    let mut seen = HashSet::new();
    for entry in entries {
        let Some(name) = entry.get("name").and_then(JsonValue::as_str) else {
            continue;
        };
        if !seen.insert(name) {
            continue;
        }
        let amount = entry
            .get("amount")
            .and_then(JsonValue::as_f64)
            .filter(|amount| amount.is_finite() && *amount >= 0.0);
        if let Some(amount) = amount {
            let unit = entry
                .get("unit")
                .and_then(JsonValue::as_str)
                .filter(|unit| !unit.is_empty())
                .map(ToOwned::to_owned);
            nutrients.insert_first(name, NutrientAmount { amount, unit });
        }
    }
    nutrients
}
