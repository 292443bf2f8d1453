// ABOUTME: Recipe intelligence engine: normalization, filter predicates, and aggregation
// ABOUTME: Pure, total functions over ladle-core models with no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ladle Intelligence
//!
//! The data pipeline between the raw search results and anything that
//! renders them:
//!
//! ```text
//! RawRecipe --normalizer--> Recipe --filter(query)--> filtered --aggregation--> stats / chart data
//! ```
//!
//! Every function here is pure. Malformed records are rejected by the
//! normalizer and missing optional fields become absence markers; nothing in
//! this crate returns an `AppError`.

/// Raw record validation and typed field extraction
pub mod normalizer;

/// Title search and cuisine/diet predicates
pub mod filter;

/// Summary statistics, label histograms, and macronutrient chart data
pub mod aggregation;

pub use aggregation::{
    aggregate, cuisine_histogram, diet_histogram, label_histogram, macronutrient_breakdown,
    LabelAxis, LabelCount, MacroSlice, RecipeStats,
};
pub use filter::{filter_recipes, matches, RecipeMatcher};
pub use normalizer::{normalize, normalize_batch, InvalidRecipe, NormalizedBatch, Rejection};
