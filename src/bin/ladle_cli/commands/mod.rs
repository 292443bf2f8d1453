// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for ladle-cli
// ABOUTME: Provides access to the list, show and options commands

pub mod list;
pub mod options;
pub mod show;
