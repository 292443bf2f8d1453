// ABOUTME: Integration tests for the recipe catalog state container
// ABOUTME: Covers lifecycle transitions, query updates, derived views and detail lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use ladle::catalog::{CatalogState, CatalogStatus, RecipeCatalog};
use ladle::errors::{AppError, AppResult, ErrorCode};
use ladle::external::{RecipeSource, StaticRecipeSource};
use ladle::models::{FilterQuery, RawRecipe};
use serde_json::json;

struct FailingSource;

#[async_trait]
impl RecipeSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_recipes(&self) -> AppResult<Vec<RawRecipe>> {
        Err(AppError::external_unavailable("Spoonacular", "connection refused"))
    }
}

fn titles(catalog: &RecipeCatalog) -> Vec<String> {
    catalog
        .filtered_view()
        .iter()
        .map(|recipe| recipe.title.clone())
        .collect()
}

fn loaded_scenario() -> RecipeCatalog {
    common::init_test_logging();
    let mut catalog = RecipeCatalog::new();
    catalog.load(&common::scenario_records());
    catalog
}

#[test]
fn test_new_catalog_is_empty() {
    let catalog = RecipeCatalog::new();
    assert_eq!(catalog.status(), CatalogStatus::Empty);
    assert!(catalog.recipes().is_empty());
    assert!(catalog.filtered_view().is_empty());
    assert_eq!(catalog.stats().total_recipes, 0);
    assert!(catalog.query().is_identity());

    let err = catalog.recipe_by_id(1).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceUnavailable);
}

#[test]
fn test_search_scenario() {
    let mut catalog = loaded_scenario();
    catalog.set_query(
        FilterQuery::new()
            .with_search_text("a")
            .with_cuisine("any")
            .with_diet("any"),
    );

    assert_eq!(titles(&catalog), vec!["A"]);
    let stats = catalog.stats();
    assert_eq!(stats.total_recipes, 1);
    assert!((stats.average_calories - 200.0).abs() < f64::EPSILON);
    assert_eq!(stats.healthy_recipes, 1);
}

#[test]
fn test_cuisine_scenario() {
    let mut catalog = loaded_scenario();
    catalog.set_query(FilterQuery::new().with_cuisine("mexican"));

    assert_eq!(titles(&catalog), vec!["B"]);
    let stats = catalog.stats();
    assert_eq!(stats.total_recipes, 1);
    assert_eq!(stats.healthy_recipes, 0);
    assert!(stats.average_calories.abs() < f64::EPSILON);
}

#[test]
fn test_set_query_is_idempotent() {
    let query = FilterQuery::new().with_search_text("b").with_diet("all");

    let mut once = loaded_scenario();
    once.set_query(query.clone());

    let mut twice = loaded_scenario();
    twice.set_query(query.clone());
    twice.set_query(query);

    assert_eq!(once.query(), twice.query());
    assert_eq!(titles(&once), titles(&twice));
    assert_eq!(once.stats(), twice.stats());
}

#[test]
fn test_per_axis_setters() {
    let mut catalog = loaded_scenario();
    catalog.set_cuisine("Italian");
    assert_eq!(titles(&catalog), vec!["A"]);
    catalog.set_cuisine("all");
    catalog.set_search_text("B");
    assert_eq!(titles(&catalog), vec!["B"]);
    catalog.set_diet("vegan");
    assert!(titles(&catalog).is_empty());
}

#[test]
fn test_histogram_ignores_query() {
    let mut catalog = loaded_scenario();
    catalog.set_search_text("no such recipe");
    assert!(catalog.filtered_view().is_empty());

    let histogram = catalog.cuisine_histogram(10);
    let labels: Vec<_> = histogram.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["italian", "mexican"]);
}

#[test]
fn test_load_drops_invalid_and_duplicate_records() {
    common::init_test_logging();
    let mut catalog = RecipeCatalog::new();
    let report = catalog.load(&[
        common::raw(json!({"id": 7, "title": "First Seen"})),
        common::raw(json!({"id": 7, "title": "Copy"})),
        common::raw(json!({"id": 8})),
        common::raw(json!({"title": "No Id"})),
        common::raw(json!({"title": "Also No Id"})),
    ]);

    assert_eq!(report.accepted, 3);
    assert_eq!(report.rejected, 1);
    assert_eq!(report.duplicates, 1);
    assert_eq!(catalog.recipe_by_id(7).unwrap().title, "First Seen");
    assert_eq!(titles(&catalog), vec!["First Seen", "No Id", "Also No Id"]);
}

#[test]
fn test_fractional_health_score_below_threshold_is_not_healthy() {
    let mut catalog = RecipeCatalog::new();
    catalog.load(&[common::raw(json!({"title": "Borderline", "healthScore": 69.6}))]);
    assert_eq!(catalog.stats().healthy_recipes, 0);

    catalog.load(&[common::raw(json!({"title": "Exact", "healthScore": 70.0}))]);
    assert_eq!(catalog.stats().healthy_recipes, 1);
}

#[test]
fn test_non_sequence_cuisines_never_match_cuisine_filter() {
    let mut catalog = RecipeCatalog::new();
    catalog.load(&[common::raw(json!({"title": "Odd", "cuisines": "Italian"}))]);
    assert_eq!(catalog.status(), CatalogStatus::Loaded);

    catalog.set_cuisine("italian");
    assert!(catalog.filtered_view().is_empty());
    catalog.set_cuisine("any");
    assert_eq!(titles(&catalog), vec!["Odd"]);
}

#[test]
fn test_recipe_lookup() {
    let mut catalog = RecipeCatalog::new();
    catalog.load(&[common::raw(common::spoonacular_record(
        42,
        "Miso Soup",
        &["Japanese"],
        &["vegan"],
        88,
        120.0,
    ))]);
    // lookup ignores the active query
    catalog.set_cuisine("greek");
    assert_eq!(catalog.recipe_by_id(42).unwrap().title, "Miso Soup");

    let err = catalog.recipe_by_id(43).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.message, "Recipe not found");
}

#[test]
fn test_begin_loading_drops_previous_recipes() {
    let mut catalog = loaded_scenario();
    assert!(catalog.loaded_at().is_some());
    catalog.begin_loading();
    assert_eq!(catalog.state(), &CatalogState::Loading);
    assert!(catalog.recipes().is_empty());
    assert!(catalog.loaded_at().is_none());
}

#[tokio::test]
async fn test_refresh_success_and_failure_and_retry() {
    common::init_test_logging();
    let mut catalog = loaded_scenario();

    let err = catalog.refresh(&FailingSource).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(catalog.status(), CatalogStatus::Failed);
    assert!(catalog.recipes().is_empty());
    assert!(catalog.filtered_view().is_empty());
    let failure = catalog.failure().unwrap();
    assert_eq!(failure.code, ErrorCode::ExternalServiceUnavailable);
    assert!(failure.message.contains("connection refused"));

    let source = StaticRecipeSource::new("fixture", common::scenario_records());
    let report = catalog.refresh(&source).await.unwrap();
    assert_eq!(report.accepted, 2);
    assert_eq!(catalog.status(), CatalogStatus::Loaded);
    assert!(catalog.failure().is_none());
}

#[tokio::test]
async fn test_refresh_through_trait_object() {
    let source: Box<dyn RecipeSource> = Box::new(StaticRecipeSource::new(
        "boxed",
        common::scenario_records(),
    ));
    let mut catalog = RecipeCatalog::new();
    catalog.refresh(source.as_ref()).await.unwrap();
    assert_eq!(catalog.recipes().len(), 2);
}

#[test]
fn test_snapshot_serializes_view() {
    let mut catalog = loaded_scenario();
    catalog.set_cuisine("italian");
    let json = serde_json::to_value(catalog.snapshot(10)).unwrap();

    assert_eq!(json["status"], "loaded");
    assert_eq!(json["query"]["cuisine"], "italian");
    assert_eq!(json["query"]["diet"], "any");
    assert_eq!(json["stats"]["total_recipes"], 1);
    assert_eq!(json["recipes"][0]["title"], "A");
    assert_eq!(json["cuisine_histogram"].as_array().unwrap().len(), 2);
    assert!(json.get("error").is_none());
    assert!(json.get("loaded_at").is_some());
}

#[test]
fn test_failed_snapshot_carries_error() {
    let mut catalog = loaded_scenario();
    catalog.fail(&AppError::external_rate_limited("Spoonacular", "HTTP 402"));
    let snapshot = catalog.snapshot(10);
    assert_eq!(snapshot.status, CatalogStatus::Failed);
    assert!(snapshot.recipes.is_empty());
    assert!(snapshot.cuisine_histogram.is_empty());
    assert_eq!(snapshot.error.unwrap().code, ErrorCode::ExternalRateLimited);
}
