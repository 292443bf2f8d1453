// ABOUTME: Unit tests for environment configuration loading
// ABOUTME: Validates defaults, key fallback, numeric validation and secret redaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ladle::config::{LadleConfig, SpoonacularConfig};
use ladle::constants::env_config;
use ladle::errors::ErrorCode;
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 6] = [
    env_config::API_KEY,
    env_config::LEGACY_API_KEY,
    env_config::BASE_URL,
    env_config::RESULT_COUNT,
    env_config::HTTP_TIMEOUT_SECS,
    env_config::HISTOGRAM_TOP_N,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = LadleConfig::from_env().unwrap();
    assert_eq!(config, LadleConfig::default());
    assert_eq!(config.spoonacular.api_key, None);
    assert_eq!(config.spoonacular.base_url, "https://api.spoonacular.com");
    assert_eq!(config.spoonacular.result_count, 100);
    assert_eq!(config.spoonacular.timeout_secs, 30);
    assert_eq!(config.histogram_top_n, 10);
}

#[test]
#[serial]
fn test_api_key_and_legacy_fallback() {
    clear_env();
    env::set_var(env_config::LEGACY_API_KEY, "legacy-key");
    assert_eq!(
        SpoonacularConfig::from_env().unwrap().api_key.as_deref(),
        Some("legacy-key")
    );

    env::set_var(env_config::API_KEY, "primary-key");
    assert_eq!(
        SpoonacularConfig::from_env().unwrap().api_key.as_deref(),
        Some("primary-key")
    );

    env::set_var(env_config::API_KEY, "   ");
    assert_eq!(
        SpoonacularConfig::from_env().unwrap().api_key.as_deref(),
        Some("legacy-key")
    );
    clear_env();
}

#[test]
#[serial]
fn test_overrides_are_parsed() {
    clear_env();
    env::set_var(env_config::BASE_URL, "http://localhost:8089/");
    env::set_var(env_config::RESULT_COUNT, "25");
    env::set_var(env_config::HTTP_TIMEOUT_SECS, " 5 ");
    env::set_var(env_config::HISTOGRAM_TOP_N, "3");

    let config = LadleConfig::from_env().unwrap();
    assert_eq!(config.spoonacular.base_url, "http://localhost:8089");
    assert_eq!(config.spoonacular.result_count, 25);
    assert_eq!(config.spoonacular.timeout().as_secs(), 5);
    assert_eq!(config.histogram_top_n, 3);
    clear_env();
}

#[test]
#[serial]
fn test_invalid_values_are_config_errors() {
    let cases = [
        (env_config::RESULT_COUNT, "0"),
        (env_config::RESULT_COUNT, "101"),
        (env_config::RESULT_COUNT, "lots"),
        (env_config::HTTP_TIMEOUT_SECS, "0"),
        (env_config::HTTP_TIMEOUT_SECS, "-1"),
        (env_config::HISTOGRAM_TOP_N, "ten"),
        (env_config::BASE_URL, "not a url"),
        (env_config::BASE_URL, "ftp://api.spoonacular.com"),
    ];
    for (var, value) in cases {
        clear_env();
        env::set_var(var, value);
        let err = LadleConfig::from_env().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid, "{var}={value}");
    }
    clear_env();
}

#[test]
fn test_debug_output_redacts_api_key() {
    let config = SpoonacularConfig::default().with_api_key("super-secret-value");
    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret-value"));
    assert!(debug.contains("REDACTED"));
}
