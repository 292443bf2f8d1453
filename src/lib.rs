// ABOUTME: Main library entry point for the Ladle recipe catalog engine
// ABOUTME: Wires configuration, the Spoonacular source, and the catalog over the core crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ladle
//!
//! Recipe filtering and aggregation. Ladle fetches a batch of recipe
//! records from the Spoonacular search API, normalizes them, and answers
//! three kinds of question over the result:
//!
//! - which recipes match a title search plus cuisine and diet constraints
//! - summary statistics (count, average calories, healthy count) and chart data
//! - the detail of one recipe by id, including its macronutrient split
//!
//! ## Architecture
//!
//! - **`ladle-core`**: error taxonomy, constants, recipe and query models
//! - **`ladle-intelligence`**: normalizer, filter predicates, aggregation
//! - **`external`**: the [`external::RecipeSource`] trait and its implementations
//! - **`catalog`**: the single-owner state container the CLI drives
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ladle::catalog::RecipeCatalog;
//! use ladle::config::LadleConfig;
//! use ladle::errors::AppResult;
//! use ladle::external::SpoonacularClient;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = LadleConfig::from_env()?;
//!     let client = SpoonacularClient::new(config.spoonacular.clone())?;
//!
//!     let mut catalog = RecipeCatalog::new();
//!     catalog.refresh(&client).await?;
//!     catalog.set_cuisine("italian");
//!
//!     let stats = catalog.stats();
//!     println!("{} italian recipes", stats.total_recipes);
//!     Ok(())
//! }
//! ```

/// Recipe catalog state container
pub mod catalog;

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Recipe sources (Spoonacular client, static JSON)
pub mod external;

/// Normalization, filtering and aggregation
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Recipe data models
pub mod models;
