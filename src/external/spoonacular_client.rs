// ABOUTME: Spoonacular complexSearch API client returning raw recipe records
// ABOUTME: Maps transport failures and HTTP statuses onto AppError codes without leaking the API key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Spoonacular API Client
//!
//! One request per load: `GET {base}/recipes/complexSearch` with recipe
//! information and nutrition expanded inline, so no per-recipe follow-up
//! calls are needed.
//!
//! # Example
//! ```rust,no_run
//! use ladle::config::SpoonacularConfig;
//! use ladle::external::SpoonacularClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SpoonacularConfig::default().with_api_key("your_api_key");
//! let client = SpoonacularClient::new(config)?;
//! let records = client.search_recipes().await?;
//! println!("{} raw records", records.len());
//! # Ok(())
//! # }
//! ```

use super::source::RecipeSource;
use crate::config::SpoonacularConfig;
use crate::constants::spoonacular::{COMPLEX_SEARCH_PATH, MAX_ERROR_BODY_CHARS, SERVICE_NAME};
use crate::errors::{AppError, AppResult};
use crate::models::RawRecipe;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

/// `complexSearch` response body. Only `results` is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    results: Vec<RawRecipe>,
    #[serde(default)]
    total_results: Option<u64>,
}

/// Spoonacular recipe search client
#[derive(Debug, Clone)]
pub struct SpoonacularClient {
    config: SpoonacularConfig,
    http_client: reqwest::Client,
}

impl SpoonacularClient {
    /// Create a client with the configured request timeout
    ///
    /// # Errors
    ///
    /// Returns an internal error if the `HTTP` client cannot be built
    pub fn new(config: SpoonacularConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Client settings
    #[must_use]
    pub const fn config(&self) -> &SpoonacularConfig {
        &self.config
    }

    /// Fetch one page of recipes from `complexSearch`
    ///
    /// # Errors
    ///
    /// - `ExternalAuthFailed` when no API key is configured or the key is rejected
    /// - `ExternalRateLimited` when the daily quota is exhausted
    /// - `ExternalServiceUnavailable` on timeouts, connection failures and 5xx
    /// - `ExternalServiceError` when the body is not a search response
    pub async fn search_recipes(&self) -> AppResult<Vec<RawRecipe>> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(AppError::external_auth_failed(
                SERVICE_NAME,
                "no API key configured",
            ));
        };

        let url = format!("{}{COMPLEX_SEARCH_PATH}", self.config.base_url);
        debug!(url = %url, number = self.config.result_count, "Requesting recipes");

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("apiKey", api_key),
                ("number", &self.config.result_count.to_string()),
                (
                    "addRecipeInformation",
                    bool_param(self.config.add_recipe_information),
                ),
                (
                    "addRecipeNutrition",
                    bool_param(self.config.add_recipe_nutrition),
                ),
                (
                    "instructionsRequired",
                    bool_param(self.config.instructions_required),
                ),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(AppError::from_upstream_status(
                SERVICE_NAME,
                status.as_u16(),
                &error_excerpt(&body),
            ));
        }

        let search: SearchResponse = serde_json::from_str(&body).map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("JSON parse error: {e}"))
        })?;

        info!(
            received = search.results.len(),
            total_results = ?search.total_results,
            "Fetched recipes from Spoonacular"
        );
        Ok(search.results)
    }
}

#[async_trait]
impl RecipeSource for SpoonacularClient {
    fn name(&self) -> &str {
        SERVICE_NAME
    }

    async fn fetch_recipes(&self) -> AppResult<Vec<RawRecipe>> {
        self.search_recipes().await
    }
}

const fn bool_param(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

// Proxies answer with whole HTML pages
fn error_excerpt(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_owned(),
    }
}

// Request URLs carry the API key in the query string
fn transport_error(error: reqwest::Error) -> AppError {
    let error = error.without_url();
    let message = error.to_string();
    if error.is_timeout() || error.is_connect() {
        AppError::external_unavailable(SERVICE_NAME, message).with_source(error)
    } else {
        AppError::external_service(SERVICE_NAME, message).with_source(error)
    }
}
