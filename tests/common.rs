// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and raw recipe record builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

use ladle::models::RawRecipe;
use serde_json::{json, Value};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Complete search result record as Spoonacular returns it
pub fn spoonacular_record(
    id: u64,
    title: &str,
    cuisines: &[&str],
    diets: &[&str],
    health_score: u32,
    calories: f64,
) -> Value {
    json!({
        "id": id,
        "title": title,
        "image": format!("https://img.spoonacular.com/recipes/{id}-312x231.jpg"),
        "readyInMinutes": 30,
        "servings": 4,
        "healthScore": health_score,
        "cuisines": cuisines,
        "diets": diets,
        "summary": format!("<b>{title}</b> is a <a href=\"https://spoonacular.com\">tasty</a> dish."),
        "nutrition": {
            "nutrients": [
                {"name": "Calories", "amount": calories, "unit": "kcal"},
                {"name": "Fat", "amount": 10.5, "unit": "g"},
                {"name": "Carbohydrates", "amount": 40.0, "unit": "g"},
                {"name": "Protein", "amount": 20.0, "unit": "g"}
            ]
        }
    })
}

/// Wrap a record as an untrusted raw recipe
pub fn raw(value: Value) -> RawRecipe {
    RawRecipe::new(value)
}

/// Two-recipe catalog: "A" (italian, 200 kcal, score 80) and "B" (mexican,
/// no nutrition, score 50)
pub fn scenario_records() -> Vec<RawRecipe> {
    vec![
        raw(json!({
            "title": "A",
            "cuisines": ["Italian"],
            "nutrition": {"nutrients": [{"name": "Calories", "amount": 200}]},
            "healthScore": 80
        })),
        raw(json!({
            "title": "B",
            "cuisines": ["Mexican"],
            "healthScore": 50
        })),
    ]
}

/// `complexSearch` response body around the given records
pub fn search_response(records: Vec<Value>) -> Value {
    let total = records.len();
    json!({
        "results": records,
        "offset": 0,
        "number": total,
        "totalResults": total
    })
}
