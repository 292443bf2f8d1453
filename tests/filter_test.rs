// ABOUTME: Integration tests for the recipe filter predicate engine
// ABOUTME: Validates search, cuisine and diet axes and their AND combination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use ladle::intelligence::{filter_recipes, matches, normalize_batch, RecipeMatcher};
use ladle::models::{FilterQuery, LabelFilter, Recipe};

fn catalog() -> Vec<Recipe> {
    let raws = vec![
        common::raw(common::spoonacular_record(
            1,
            "Chicken Tikka Masala",
            &["Indian", "Asian"],
            &["gluten free"],
            60,
            520.0,
        )),
        common::raw(common::spoonacular_record(
            2,
            "Vegan Pad Thai",
            &["Thai", "Asian"],
            &["vegan", "vegetarian"],
            78,
            430.0,
        )),
        common::raw(common::spoonacular_record(
            3,
            "Margherita Pizza",
            &["Italian"],
            &["vegetarian"],
            35,
            800.0,
        )),
    ];
    normalize_batch(&raws).recipes
}

fn titles(recipes: &[&Recipe]) -> Vec<String> {
    recipes.iter().map(|r| r.title.clone()).collect()
}

#[test]
fn test_identity_query_matches_everything() {
    let recipes = catalog();
    let query = FilterQuery::new();
    assert!(query.is_identity());
    assert_eq!(filter_recipes(&recipes, &query).len(), recipes.len());
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let recipes = catalog();
    let found = filter_recipes(&recipes, &FilterQuery::new().with_search_text("PAD"));
    assert_eq!(titles(&found), vec!["Vegan Pad Thai"]);

    let found = filter_recipes(&recipes, &FilterQuery::new().with_search_text("a"));
    assert_eq!(found.len(), 3);
}

#[test]
fn test_cuisine_constraint_is_case_insensitive() {
    let recipes = catalog();
    let found = filter_recipes(&recipes, &FilterQuery::new().with_cuisine("ASIAN"));
    assert_eq!(
        titles(&found),
        vec!["Chicken Tikka Masala", "Vegan Pad Thai"]
    );
}

#[test]
fn test_diet_and_cuisine_combine() {
    let recipes = catalog();
    let query = FilterQuery::new()
        .with_cuisine("asian")
        .with_diet("vegetarian");
    assert_eq!(titles(&filter_recipes(&recipes, &query)), vec!["Vegan Pad Thai"]);

    let query = query.with_search_text("pizza");
    assert!(filter_recipes(&recipes, &query).is_empty());
}

#[test]
fn test_all_and_any_sentinels_disable_axis() {
    let recipes = catalog();
    for sentinel in ["all", "any", "ALL", ""] {
        let query = FilterQuery::new().with_cuisine(sentinel).with_diet(sentinel);
        assert_eq!(query.cuisine, LabelFilter::Any);
        assert_eq!(filter_recipes(&recipes, &query).len(), 3);
    }
}

#[test]
fn test_unknown_label_matches_nothing() {
    let recipes = catalog();
    assert!(filter_recipes(&recipes, &FilterQuery::new().with_cuisine("martian")).is_empty());
}

#[test]
fn test_matcher_agrees_with_one_shot_form() {
    let recipes = catalog();
    let query = FilterQuery::new().with_diet("vegetarian").with_search_text("z");
    let matcher = RecipeMatcher::new(&query);
    for recipe in &recipes {
        assert_eq!(matcher.matches(recipe), matches(recipe, &query));
    }
}
