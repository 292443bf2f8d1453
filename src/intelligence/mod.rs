// ABOUTME: Intelligence module re-exports from ladle-intelligence crate
// ABOUTME: Normalization, filtering and aggregation available under crate::intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure recipe processing. This module re-exports the `ladle-intelligence`
//! crate so binaries and tests can reach it through the main crate.

pub use ladle_intelligence::*;

pub use ladle_intelligence::{aggregation, filter, normalizer};
