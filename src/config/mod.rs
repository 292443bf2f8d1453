// ABOUTME: Configuration management module for the Ladle recipe engine
// ABOUTME: Loads API credentials and engine settings from the process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Ladle
//!
//! Configuration is environment-only; there is no config file. See
//! [`environment::LadleConfig::from_env`] for the recognized variables.

/// Environment-driven configuration
pub mod environment;

pub use environment::{LadleConfig, SpoonacularConfig};
