// ABOUTME: Application-wide constants for recipe filtering and aggregation
// ABOUTME: Filter option lists, health threshold, nutrient names, and Spoonacular defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Filter axis values and sentinels
pub mod filters {
    /// Sentinel meaning "no constraint on this axis"
    pub const ANY: &str = "any";
    /// Alternate sentinel used by the web filter dropdowns
    pub const ALL: &str = "all";

    /// Cuisines offered by the recipe list filter
    pub const CUISINE_OPTIONS: &[&str] = &[
        "american",
        "italian",
        "mexican",
        "chinese",
        "indian",
        "japanese",
        "mediterranean",
        "greek",
        "french",
        "thai",
        "vietnamese",
        "korean",
    ];

    /// Diets offered by the recipe list filter
    pub const DIET_OPTIONS: &[&str] = &["vegetarian", "vegan", "gluten free"];
}

/// Aggregation thresholds
pub mod aggregation {
    /// Minimum health score (inclusive) for a recipe to count as healthy
    pub const HEALTHY_SCORE_THRESHOLD: u32 = 70;
    /// Number of cuisine bars shown in the distribution chart
    pub const DEFAULT_HISTOGRAM_TOP_N: usize = 10;
}

/// Nutrient names as reported in `nutrition.nutrients[].name`
pub mod nutrients {
    /// Energy in kcal
    pub const CALORIES: &str = "Calories";
    /// Protein in grams
    pub const PROTEIN: &str = "Protein";
    /// Carbohydrates in grams
    pub const CARBOHYDRATES: &str = "Carbohydrates";
    /// Fat in grams
    pub const FAT: &str = "Fat";
}

/// Spoonacular API defaults
pub mod spoonacular {
    /// Service name used in errors and logs
    pub const SERVICE_NAME: &str = "Spoonacular";
    /// Production API base URL
    pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";
    /// Search endpoint path
    pub const COMPLEX_SEARCH_PATH: &str = "/recipes/complexSearch";
    /// Results requested per load (single page, no pagination)
    pub const DEFAULT_RESULT_COUNT: u32 = 100;
    /// Upper bound accepted by `complexSearch` for `number`
    pub const MAX_RESULT_COUNT: u32 = 100;
    /// Request timeout
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Characters of an upstream error body kept in error messages
    pub const MAX_ERROR_BODY_CHARS: usize = 200;
}

/// Environment variable names
pub mod env_config {
    /// Spoonacular API key
    pub const API_KEY: &str = "SPOONACULAR_API_KEY";
    /// API key name used by Vite-built web front ends
    pub const LEGACY_API_KEY: &str = "VITE_APP_API_KEY";
    /// Override for the API base URL
    pub const BASE_URL: &str = "SPOONACULAR_BASE_URL";
    /// Number of recipes to request
    pub const RESULT_COUNT: &str = "LADLE_RESULT_COUNT";
    /// HTTP timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "LADLE_HTTP_TIMEOUT_SECS";
    /// Number of histogram buckets
    pub const HISTOGRAM_TOP_N: &str = "LADLE_HISTOGRAM_TOP_N";
}

/// Service identification for logging
pub mod service_names {
    /// Main service name
    pub const LADLE: &str = "ladle";
}
