// ABOUTME: Recipe data models re-exported from ladle-core
// ABOUTME: RawRecipe, Recipe, FilterQuery and their supporting value types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - [`RawRecipe`]: an untrusted search result record, untouched
//! - [`Recipe`]: a validated recipe with absence markers for unknown fields
//! - [`FilterQuery`]: the search text plus cuisine and diet constraints

pub use ladle_core::models::*;
