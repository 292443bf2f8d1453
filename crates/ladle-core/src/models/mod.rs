// ABOUTME: Core data model definitions for recipes and filter queries
// ABOUTME: Re-exports raw (untrusted) and normalized recipe types plus FilterQuery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Models
//!
//! Two layers of recipe data live here:
//!
//! - [`RawRecipe`]: the untrusted JSON record exactly as the search API sent it
//! - [`Recipe`]: the validated entity produced by the normalizer, with every
//!   optional field typed as `Option` so "unknown" never reads as zero
//!
//! [`FilterQuery`] is the three-axis constraint applied to a recipe collection.

mod query;
mod raw;
mod recipe;

pub use query::{FilterQuery, LabelFilter};
pub use raw::RawRecipe;
pub use recipe::{LabelSet, NutrientAmount, Nutrients, Recipe, RecipeId, UntrustedHtml};
