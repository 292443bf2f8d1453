// ABOUTME: Error handling re-exports from ladle-core
// ABOUTME: Keeps crate::errors paths stable for the client, catalog and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! All fallible operations in this crate return [`AppResult`]. The error
//! types themselves live in `ladle-core` so that the intelligence crate can
//! share them without depending on the HTTP stack.

pub use ladle_core::errors::*;
