// ABOUTME: Core types and constants for the Ladle recipe engine
// ABOUTME: Foundation crate with error handling, recipe models, filter queries, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ladle Core
//!
//! Foundation crate providing shared types and constants for the Ladle recipe
//! engine. Nothing in here performs I/O; the algorithms live in
//! `ladle-intelligence` and the network/CLI plumbing in the main crate.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Filter options, thresholds, nutrient names, API defaults
//! - **models**: `RawRecipe`, `Recipe`, `LabelSet`, `FilterQuery`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (raw and normalized recipes, filter queries)
pub mod models;
