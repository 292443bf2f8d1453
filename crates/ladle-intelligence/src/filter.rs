// ABOUTME: Filter predicate engine matching recipes against a FilterQuery
// ABOUTME: Case-insensitive title substring AND cuisine membership AND diet membership
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ladle_core::models::{FilterQuery, LabelFilter, LabelSet, Recipe};

/// A [`FilterQuery`] with its search text lower-cased once up front.
///
/// Use this when testing many recipes against the same query; [`matches`] is
/// the one-shot form.
#[derive(Debug, Clone)]
pub struct RecipeMatcher<'q> {
    needle: String,
    cuisine: &'q LabelFilter,
    diet: &'q LabelFilter,
}

impl<'q> RecipeMatcher<'q> {
    /// Prepare a query for repeated matching
    #[must_use]
    pub fn new(query: &'q FilterQuery) -> Self {
        Self {
            needle: query.search_text.to_lowercase(),
            cuisine: &query.cuisine,
            diet: &query.diet,
        }
    }

    /// Whether the recipe satisfies all three axes
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_title(&recipe.title)
            && label_axis_matches(self.cuisine, &recipe.cuisines)
            && label_axis_matches(self.diet, &recipe.diets)
    }

    fn matches_title(&self, title: &str) -> bool {
        self.needle.is_empty() || title.to_lowercase().contains(&self.needle)
    }
}

/// Evaluate one recipe against a query
#[must_use]
pub fn matches(recipe: &Recipe, query: &FilterQuery) -> bool {
    RecipeMatcher::new(query).matches(recipe)
}

/// All recipes satisfying `query`, in input order
pub fn filter_recipes<'a, I>(recipes: I, query: &FilterQuery) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let matcher = RecipeMatcher::new(query);
    recipes
        .into_iter()
        .filter(|recipe| matcher.matches(recipe))
        .collect()
}

fn label_axis_matches(filter: &LabelFilter, labels: &LabelSet) -> bool {
    match filter {
        LabelFilter::Any => true,
        LabelFilter::Only(label) => labels.contains(label),
    }
}
