// ABOUTME: List command for ladle-cli
// ABOUTME: Applies the filter query and prints stats, matching recipes and the cuisine histogram
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ladle::{catalog::RecipeCatalog, errors::AppResult, models::FilterQuery};
use tracing::debug;

use crate::helpers::display::{display_recipe_list, print_json, OutputFormat};

/// Filter the catalog and print the list view
pub fn run(
    catalog: &mut RecipeCatalog,
    query: FilterQuery,
    histogram_top_n: usize,
    format: OutputFormat,
) -> AppResult<()> {
    debug!(query = ?query, "Applying filter query");
    catalog.set_query(query);

    match format {
        OutputFormat::Json => print_json(&catalog.snapshot(histogram_top_n)),
        OutputFormat::Text => {
            display_recipe_list(
                catalog.query(),
                &catalog.stats(),
                &catalog.filtered_view(),
                &catalog.cuisine_histogram(histogram_top_n),
            );
            Ok(())
        }
    }
}
