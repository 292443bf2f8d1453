// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for ladle-cli
// ABOUTME: Text tables and charts for recipes, JSON output, and error reporting

use clap::ValueEnum;
use ladle::{
    constants::nutrients,
    errors::{AppError, AppResult, ErrorResponse},
    intelligence::{LabelCount, MacroSlice, RecipeStats},
    models::{FilterQuery, LabelSet, Recipe},
};
use serde::Serialize;

const NOT_AVAILABLE: &str = "N/A";
const CHART_WIDTH: usize = 40;

/// How results are printed on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Report a failed command
pub fn print_error(error: &AppError, format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&ErrorResponse::from(error)) {
            Ok(json) => println!("{json}"),
            Err(_) => eprintln!("Error: {error}"),
        },
        OutputFormat::Text => eprintln!("Error: {error}"),
    }
}

/// Stats header, recipe table, and cuisine chart
pub fn display_recipe_list(
    query: &FilterQuery,
    stats: &RecipeStats,
    recipes: &[&Recipe],
    histogram: &[LabelCount],
) {
    println!(
        "\nRecipes (search: \"{}\", cuisine: {}, diet: {})",
        query.search_text, query.cuisine, query.diet
    );
    println!("{}", "=".repeat(80));
    println!("   Total Recipes:    {}", stats.total_recipes);
    println!("   Average Calories: {:.0}", stats.average_calories);
    println!("   Healthy Recipes:  {}", stats.healthy_recipes);

    println!("\n{:>10}  {:<44}  {:>12}  {:>6}", "ID", "TITLE", "CALORIES", "HEALTH");
    println!("{}", "-".repeat(80));
    if recipes.is_empty() {
        println!("   No recipes match the current filters");
    }
    for recipe in recipes {
        println!(
            "{:>10}  {:<44}  {:>12}  {:>6}",
            recipe
                .id
                .map_or_else(|| "-".to_owned(), |id| id.to_string()),
            truncate(&recipe.title, 44),
            calories_label(recipe),
            optional_label(recipe.health_score),
        );
    }

    println!("\nCuisine Distribution (all recipes)");
    println!("{}", "-".repeat(80));
    display_histogram(histogram);
}

/// Recipe detail view
pub fn display_recipe_detail(recipe: &Recipe, macros: &[MacroSlice]) {
    println!("\n{}", recipe.title);
    println!("{}", "=".repeat(80));
    if let Some(id) = recipe.id {
        println!("   ID:            {id}");
    }
    println!(
        "   Ready In:      {}",
        recipe
            .ready_in_minutes
            .map_or_else(|| NOT_AVAILABLE.to_owned(), |minutes| format!("{minutes} minutes"))
    );
    println!("   Servings:      {}", optional_label(recipe.servings));
    println!("   Health Score:  {}", optional_label(recipe.health_score));
    println!("   Calories:      {}", calories_label(recipe));
    println!("   Diets:         {}", labels_label(&recipe.diets));
    println!("   Cuisines:      {}", labels_label(&recipe.cuisines));
    if let Some(image) = &recipe.image {
        println!("   Image:         {image}");
    }

    println!("\nMacronutrients");
    println!("{}", "-".repeat(80));
    let total: f64 = macros.iter().map(|slice| slice.value).sum();
    for slice in macros {
        if slice.known {
            let share = if total > 0.0 {
                slice.value / total * 100.0
            } else {
                0.0
            };
            println!("   {:<8} {:>8.1} g  {share:>5.1}%", slice.name, slice.value);
        } else {
            println!("   {:<8} {NOT_AVAILABLE:>10}", slice.name);
        }
    }

    if let Some(summary) = recipe.summary.as_ref().filter(|summary| !summary.is_blank()) {
        println!("\nSummary");
        println!("{}", "-".repeat(80));
        println!("{}", summary.plain_text());
    }
}

fn display_histogram(histogram: &[LabelCount]) {
    let Some(max) = histogram.iter().map(|bucket| bucket.count).max() else {
        println!("   No cuisine labels");
        return;
    };
    for bucket in histogram {
        let width = (bucket.count * CHART_WIDTH).div_ceil(max);
        println!(
            "   {:<16} {:>4} {}",
            bucket.label,
            bucket.count,
            "#".repeat(width)
        );
    }
}

fn calories_label(recipe: &Recipe) -> String {
    recipe
        .nutrients
        .get(nutrients::CALORIES)
        .map_or_else(
            || NOT_AVAILABLE.to_owned(),
            |calories| match &calories.unit {
                Some(unit) => format!("{:.0} {unit}", calories.amount),
                None => format!("{:.0}", calories.amount),
            },
        )
}

fn optional_label(value: Option<u32>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_owned(), |value| value.to_string())
}

fn labels_label(labels: &LabelSet) -> String {
    if labels.is_empty() {
        NOT_AVAILABLE.to_owned()
    } else {
        labels.iter().collect::<Vec<_>>().join(", ")
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_owned()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
