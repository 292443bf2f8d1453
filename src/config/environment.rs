// ABOUTME: Environment configuration for the Spoonacular client and aggregation settings
// ABOUTME: Parses and validates environment variables into strongly typed config structs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `SPOONACULAR_API_KEY` (fallback `VITE_APP_API_KEY`) | unset | API key |
//! | `SPOONACULAR_BASE_URL` | `https://api.spoonacular.com` | API root |
//! | `LADLE_RESULT_COUNT` | `100` | recipes requested, 1-100 |
//! | `LADLE_HTTP_TIMEOUT_SECS` | `30` | request timeout |
//! | `LADLE_HISTOGRAM_TOP_N` | `10` | cuisine chart buckets |
//!
//! A missing API key is not a configuration error: the fetch fails instead
//! and the catalog lands in its `Failed` state.

use crate::constants::{aggregation, env_config, spoonacular};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

/// Spoonacular `complexSearch` client settings
#[derive(Clone, PartialEq, Eq)]
pub struct SpoonacularConfig {
    /// API key; `None` makes every fetch fail with an auth error
    pub api_key: Option<String>,
    /// API root without trailing slash
    pub base_url: String,
    /// Recipes requested per load
    pub result_count: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// `addRecipeInformation` query flag
    pub add_recipe_information: bool,
    /// `addRecipeNutrition` query flag
    pub add_recipe_nutrition: bool,
    /// `instructionsRequired` query flag
    pub instructions_required: bool,
}

impl Default for SpoonacularConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: spoonacular::DEFAULT_BASE_URL.to_owned(),
            result_count: spoonacular::DEFAULT_RESULT_COUNT,
            timeout_secs: spoonacular::DEFAULT_TIMEOUT_SECS,
            add_recipe_information: true,
            add_recipe_nutrition: true,
            instructions_required: true,
        }
    }
}

impl fmt::Debug for SpoonacularConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpoonacularConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("result_count", &self.result_count)
            .field("timeout_secs", &self.timeout_secs)
            .field("add_recipe_information", &self.add_recipe_information)
            .field("add_recipe_nutrition", &self.add_recipe_nutrition)
            .field("instructions_required", &self.instructions_required)
            .finish()
    }
}

impl SpoonacularConfig {
    /// Load client settings from environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the base URL or a numeric variable cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        let api_key = non_blank_env(env_config::API_KEY)
            .or_else(|| non_blank_env(env_config::LEGACY_API_KEY));
        if api_key.is_none() {
            warn!(
                "{} is not set; recipe fetches will fail until it is provided",
                env_config::API_KEY
            );
        }

        let base_url = validate_base_url(&env_var_or(
            env_config::BASE_URL,
            spoonacular::DEFAULT_BASE_URL,
        ))?;

        let result_count =
            parse_env(env_config::RESULT_COUNT, spoonacular::DEFAULT_RESULT_COUNT)?;
        if !(1..=spoonacular::MAX_RESULT_COUNT).contains(&result_count) {
            return Err(AppError::config_invalid(format!(
                "{} must be between 1 and {}, got {result_count}",
                env_config::RESULT_COUNT,
                spoonacular::MAX_RESULT_COUNT
            )));
        }

        let timeout_secs =
            parse_env(env_config::HTTP_TIMEOUT_SECS, spoonacular::DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(AppError::config_invalid(format!(
                "{} must be greater than zero",
                env_config::HTTP_TIMEOUT_SECS
            )));
        }

        Ok(Self {
            api_key,
            base_url,
            result_count,
            timeout_secs,
            ..Self::default()
        })
    }

    /// Replace the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Replace the base URL (used by tests pointing at a mock server)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadleConfig {
    /// Recipe API client settings
    pub spoonacular: SpoonacularConfig,
    /// Number of cuisine histogram buckets
    pub histogram_top_n: usize,
}

impl Default for LadleConfig {
    fn default() -> Self {
        Self {
            spoonacular: SpoonacularConfig::default(),
            histogram_top_n: aggregation::DEFAULT_HISTOGRAM_TOP_N,
        }
    }
}

impl LadleConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when any variable is present but malformed
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            spoonacular: SpoonacularConfig::from_env()?,
            histogram_top_n: parse_env(
                env_config::HISTOGRAM_TOP_N,
                aggregation::DEFAULT_HISTOGRAM_TOP_N,
            )?,
        };
        info!(
            base_url = %config.spoonacular.base_url,
            result_count = config.spoonacular.result_count,
            api_key_present = config.spoonacular.api_key.is_some(),
            histogram_top_n = config.histogram_top_n,
            "Configuration loaded"
        );
        Ok(config)
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn non_blank_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e| {
            AppError::config_invalid(format!("{key} has invalid value '{raw}': {e}"))
        }),
        Err(_) => Ok(default),
    }
}

fn validate_base_url(raw: &str) -> AppResult<String> {
    let url = Url::parse(raw)
        .map_err(|e| AppError::config_invalid(format!("invalid base URL '{raw}': {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config_invalid(format!(
            "base URL must use http or https, got '{}'",
            url.scheme()
        )));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}
