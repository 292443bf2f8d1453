// ABOUTME: Application constants re-exported from ladle-core
// ABOUTME: Filter options, thresholds, nutrient names, and environment variable keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use ladle_core::constants::*;
