// ABOUTME: Recipe catalog state container owning the loaded recipes and the active filter query
// ABOUTME: Tagged lifecycle Empty -> Loading -> Loaded | Failed with derived views recomputed on read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Catalog
//!
//! Single-owner state: every mutation takes `&mut self`, and every derived
//! value (filtered view, stats, chart data) is recomputed from the current
//! recipes and query when read, so nothing can go stale.
//!
//! Only `Loaded` carries recipes. Entering `Loading` or `Failed` drops any
//! previous collection, so a failed refresh never leaves partial data behind.

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::external::RecipeSource;
use crate::intelligence::{
    aggregate, cuisine_histogram, filter_recipes, normalize_batch, LabelCount, RecipeStats,
};
use crate::models::{FilterQuery, LabelFilter, RawRecipe, Recipe, RecipeId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info, warn};

/// Lifecycle tag without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogStatus {
    /// Nothing requested yet
    Empty,
    /// Fetch in flight
    Loading,
    /// Recipes available
    Loaded,
    /// Last fetch failed
    Failed,
}

impl CatalogStatus {
    /// Lower-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for CatalogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the last fetch failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFailure {
    /// Error code of the fetch failure
    pub code: ErrorCode,
    /// Error message
    pub message: String,
}

impl From<&AppError> for CatalogFailure {
    fn from(error: &AppError) -> Self {
        Self {
            code: error.code,
            message: error.message.clone(),
        }
    }
}

/// Catalog lifecycle with its payload
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    /// Nothing requested yet
    Empty,
    /// Fetch in flight; no recipes held
    Loading,
    /// Normalized recipes in load order
    Loaded {
        /// Valid, id-unique recipes
        recipes: Vec<Recipe>,
        /// When the collection was installed
        loaded_at: DateTime<Utc>,
    },
    /// Fetch failed; no recipes held
    Failed(CatalogFailure),
}

impl CatalogState {
    /// Tag for this state
    #[must_use]
    pub const fn status(&self) -> CatalogStatus {
        match self {
            Self::Empty => CatalogStatus::Empty,
            Self::Loading => CatalogStatus::Loading,
            Self::Loaded { .. } => CatalogStatus::Loaded,
            Self::Failed(_) => CatalogStatus::Failed,
        }
    }
}

/// Outcome of [`RecipeCatalog::load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoadReport {
    /// Recipes installed in the catalog
    pub accepted: usize,
    /// Records rejected by the normalizer
    pub rejected: usize,
    /// Valid records dropped because an earlier record had the same id
    pub duplicates: usize,
}

/// Serializable view of the catalog for presentation layers
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSnapshot {
    /// Lifecycle tag
    pub status: CatalogStatus,
    /// Active query
    pub query: FilterQuery,
    /// Aggregates over the filtered recipes
    pub stats: RecipeStats,
    /// Filtered recipes in load order
    pub recipes: Vec<Recipe>,
    /// Cuisine histogram over the full collection
    pub cuisine_histogram: Vec<LabelCount>,
    /// Load time when loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<DateTime<Utc>>,
    /// Failure details when failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CatalogFailure>,
}

/// Owner of the recipe collection and the current filter query
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    state: CatalogState,
    query: FilterQuery,
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeCatalog {
    /// Empty catalog with the identity query
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CatalogState::Empty,
            query: FilterQuery::new(),
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Current lifecycle tag
    #[must_use]
    pub const fn status(&self) -> CatalogStatus {
        self.state.status()
    }

    /// Active filter query
    #[must_use]
    pub const fn query(&self) -> &FilterQuery {
        &self.query
    }

    /// Failure details, if the last fetch failed
    #[must_use]
    pub fn failure(&self) -> Option<&CatalogFailure> {
        match &self.state {
            CatalogState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Enter `Loading`, dropping any held recipes
    pub fn begin_loading(&mut self) {
        info!(from = %self.status(), "Catalog loading");
        self.state = CatalogState::Loading;
    }

    /// Normalize `raws` and install the valid recipes, entering `Loaded`.
    ///
    /// Invalid records are dropped. For a repeated id the first record wins.
    pub fn load(&mut self, raws: &[RawRecipe]) -> LoadReport {
        let batch = normalize_batch(raws);

        let mut seen = HashSet::new();
        let mut duplicates = 0_usize;
        let mut recipes = Vec::with_capacity(batch.recipes.len());
        for recipe in batch.recipes {
            if let Some(id) = recipe.id {
                if !seen.insert(id) {
                    debug!(recipe.id = id, title = %recipe.title, "Dropping duplicate recipe id");
                    duplicates += 1;
                    continue;
                }
            }
            recipes.push(recipe);
        }

        let report = LoadReport {
            accepted: recipes.len(),
            rejected: batch.rejected.len(),
            duplicates,
        };
        info!(
            accepted = report.accepted,
            rejected = report.rejected,
            duplicates = report.duplicates,
            "Catalog loaded"
        );

        self.state = CatalogState::Loaded {
            recipes,
            loaded_at: Utc::now(),
        };
        report
    }

    /// Enter `Failed`, dropping any held recipes
    pub fn fail(&mut self, error: &AppError) {
        warn!(code = ?error.code, error = %error, "Catalog fetch failed");
        self.state = CatalogState::Failed(CatalogFailure::from(error));
    }

    /// Fetch from `source` and load the result, or fail.
    ///
    /// Calling this again after a failure is the retry path.
    ///
    /// # Errors
    ///
    /// Returns the source's error after the catalog has entered `Failed`
    pub async fn refresh<S>(&mut self, source: &S) -> AppResult<LoadReport>
    where
        S: RecipeSource + ?Sized,
    {
        self.begin_loading();
        debug!(source = source.name(), "Fetching recipes");
        match source.fetch_recipes().await {
            Ok(raws) => Ok(self.load(&raws)),
            Err(error) => {
                self.fail(&error);
                Err(error)
            }
        }
    }

    /// Replace the whole query
    pub fn set_query(&mut self, query: FilterQuery) {
        self.query = query;
    }

    /// Replace the search text
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
    }

    /// Replace the cuisine constraint
    pub fn set_cuisine(&mut self, cuisine: impl Into<LabelFilter>) {
        self.query.cuisine = cuisine.into();
    }

    /// Replace the diet constraint
    pub fn set_diet(&mut self, diet: impl Into<LabelFilter>) {
        self.query.diet = diet.into();
    }

    /// All held recipes in load order; empty unless `Loaded`
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        match &self.state {
            CatalogState::Loaded { recipes, .. } => recipes,
            _ => &[],
        }
    }

    /// When the current collection was installed
    #[must_use]
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        match &self.state {
            CatalogState::Loaded { loaded_at, .. } => Some(*loaded_at),
            _ => None,
        }
    }

    /// Recipes matching the current query, in load order
    #[must_use]
    pub fn filtered_view(&self) -> Vec<&Recipe> {
        filter_recipes(self.recipes(), &self.query)
    }

    /// Aggregates over the filtered view
    #[must_use]
    pub fn stats(&self) -> RecipeStats {
        aggregate(self.filtered_view())
    }

    /// Cuisine histogram over the full collection, ignoring the query
    #[must_use]
    pub fn cuisine_histogram(&self, top_n: usize) -> Vec<LabelCount> {
        cuisine_histogram(self.recipes(), top_n)
    }

    /// Look up a recipe by id, regardless of the current query
    ///
    /// # Errors
    ///
    /// - `ResourceUnavailable` when the catalog is not loaded
    /// - `ResourceNotFound` ("Recipe not found") when no recipe has this id
    pub fn recipe_by_id(&self, id: RecipeId) -> AppResult<&Recipe> {
        let CatalogState::Loaded { recipes, .. } = &self.state else {
            return Err(AppError::unavailable(format!(
                "recipes are not loaded (catalog is {})",
                self.status()
            )));
        };
        recipes
            .iter()
            .find(|recipe| recipe.id == Some(id))
            .ok_or_else(|| AppError::not_found("Recipe"))
    }

    /// Everything a list view renders, as one serializable value
    #[must_use]
    pub fn snapshot(&self, histogram_top_n: usize) -> CatalogSnapshot {
        let filtered = self.filtered_view();
        CatalogSnapshot {
            status: self.status(),
            query: self.query.clone(),
            stats: aggregate(filtered.iter().copied()),
            recipes: filtered.into_iter().cloned().collect(),
            cuisine_histogram: self.cuisine_histogram(histogram_top_n),
            loaded_at: self.loaded_at(),
            error: self.failure().cloned(),
        }
    }
}
