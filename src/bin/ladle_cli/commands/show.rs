// ABOUTME: Show command for ladle-cli
// ABOUTME: Prints one recipe's details and macronutrient breakdown by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ladle::{
    catalog::RecipeCatalog,
    errors::AppResult,
    intelligence::{macronutrient_breakdown, MacroSlice},
    models::{Recipe, RecipeId},
};
use serde::Serialize;

use crate::helpers::display::{display_recipe_detail, print_json, OutputFormat};

#[derive(Serialize)]
struct RecipeDetail<'a> {
    recipe: &'a Recipe,
    macronutrients: Vec<MacroSlice>,
    healthy: bool,
}

/// Look up a recipe and print its detail view
pub fn run(catalog: &RecipeCatalog, id: RecipeId, format: OutputFormat) -> AppResult<()> {
    let recipe = catalog.recipe_by_id(id)?;
    let macronutrients = macronutrient_breakdown(recipe);

    match format {
        OutputFormat::Json => print_json(&RecipeDetail {
            recipe,
            macronutrients,
            healthy: recipe.is_healthy(),
        }),
        OutputFormat::Text => {
            display_recipe_detail(recipe, &macronutrients);
            Ok(())
        }
    }
}
