// ABOUTME: Aggregation engine producing summary statistics and chart data for recipes
// ABOUTME: Recipe stats, stable top-N label histograms, and macronutrient pie slices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe aggregation
//!
//! Callers decide which collection each aggregate runs over. The recipe list
//! view computes [`aggregate`] over the *filtered* recipes but
//! [`cuisine_histogram`] over the *full* catalog, so the chart does not move
//! while the user types a search.

use ladle_core::constants::nutrients;
use ladle_core::models::{LabelSet, Recipe};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Summary statistics over a recipe collection
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RecipeStats {
    /// Number of recipes
    pub total_recipes: usize,
    /// Mean calories, unknown calories counted as 0; 0 for an empty collection
    pub average_calories: f64,
    /// Recipes with a known health score at or above the healthy threshold
    pub healthy_recipes: usize,
}

/// Compute [`RecipeStats`] in one pass
pub fn aggregate<'a, I>(recipes: I) -> RecipeStats
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut total_recipes = 0_usize;
    let mut calorie_sum = 0.0_f64;
    let mut healthy_recipes = 0_usize;

    for recipe in recipes {
        total_recipes += 1;
        calorie_sum += recipe.calories().unwrap_or(0.0);
        if recipe.is_healthy() {
            healthy_recipes += 1;
        }
    }

    let average_calories = if total_recipes == 0 {
        0.0
    } else {
        calorie_sum / total_recipes as f64
    };

    RecipeStats {
        total_recipes,
        average_calories,
        healthy_recipes,
    }
}

/// Which label set a histogram counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelAxis {
    /// `Recipe::cuisines`
    Cuisine,
    /// `Recipe::diets`
    Diet,
}

impl LabelAxis {
    fn labels(self, recipe: &Recipe) -> &LabelSet {
        match self {
            Self::Cuisine => &recipe.cuisines,
            Self::Diet => &recipe.diets,
        }
    }
}

/// One histogram bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    /// Lower-cased label
    pub label: String,
    /// Number of recipes carrying the label
    pub count: usize,
}

/// Count recipes per label, sorted by count descending, truncated to `top_n`.
///
/// A recipe with several labels contributes to each. Ties keep the order in
/// which labels were first encountered.
pub fn label_histogram<'a, I>(recipes: I, axis: LabelAxis, top_n: usize) -> Vec<LabelCount>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut buckets: Vec<LabelCount> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for recipe in recipes {
        for label in axis.labels(recipe).iter() {
            if let Some(&position) = positions.get(label) {
                buckets[position].count += 1;
            } else {
                positions.insert(label, buckets.len());
                buckets.push(LabelCount {
                    label: label.to_owned(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable: equal counts stay in first-seen order
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets.truncate(top_n);
    buckets
}

/// Cuisine distribution chart data
pub fn cuisine_histogram<'a, I>(recipes: I, top_n: usize) -> Vec<LabelCount>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    label_histogram(recipes, LabelAxis::Cuisine, top_n)
}

/// Diet distribution chart data
pub fn diet_histogram<'a, I>(recipes: I, top_n: usize) -> Vec<LabelCount>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    label_histogram(recipes, LabelAxis::Diet, top_n)
}

/// One slice of the macronutrient pie chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroSlice {
    /// Chart label ("Protein", "Carbs", "Fat")
    pub name: String,
    /// Source nutrient name
    pub nutrient: String,
    /// Grams; 0 when unknown
    pub value: f64,
    /// Whether the recipe reported this nutrient
    pub known: bool,
}

/// Chart label and source nutrient for each pie slice, in display order
const MACRO_SLICES: [(&str, &str); 3] = [
    ("Protein", nutrients::PROTEIN),
    ("Carbs", nutrients::CARBOHYDRATES),
    ("Fat", nutrients::FAT),
];

/// Protein / carbs / fat distribution for the detail view
#[must_use]
pub fn macronutrient_breakdown(recipe: &Recipe) -> Vec<MacroSlice> {
    MACRO_SLICES
        .iter()
        .map(|(name, nutrient)| {
            let amount = recipe.nutrient(nutrient);
            MacroSlice {
                name: (*name).to_owned(),
                nutrient: (*nutrient).to_owned(),
                value: amount.unwrap_or(0.0),
                known: amount.is_some(),
            }
        })
        .collect()
}
