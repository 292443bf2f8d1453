// ABOUTME: External recipe sources: the Spoonacular search client and static JSON sources
// ABOUTME: Everything that produces raw recipe records lives behind the RecipeSource trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External Recipe Sources
//!
//! The catalog never talks to `HTTP` directly. It asks a [`RecipeSource`] for
//! raw records and normalizes whatever comes back.

pub mod source;
pub mod spoonacular_client;

pub use source::{RecipeSource, StaticRecipeSource};
pub use spoonacular_client::SpoonacularClient;
