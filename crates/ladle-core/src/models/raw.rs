// ABOUTME: Untrusted recipe record as received from the recipe search API
// ABOUTME: Thin wrapper over serde_json::Value with lenient field accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A recipe record with no guaranteed shape.
///
/// Any JSON value deserializes into a `RawRecipe`, including `null` and
/// non-object values, so one malformed element never fails decoding of the
/// whole `results` array. Validation happens later, in the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecipe(pub JsonValue);

impl RawRecipe {
    /// Wrap an arbitrary JSON value
    #[must_use]
    pub const fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// Top-level field lookup; `None` for missing keys and non-object records
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&JsonValue> {
        self.0.as_object().and_then(|object| object.get(key))
    }

    /// Nested lookup along a path of object keys (e.g. `["nutrition", "nutrients"]`)
    #[must_use]
    pub fn path(&self, keys: &[&str]) -> Option<&JsonValue> {
        keys.iter()
            .try_fold(&self.0, |value, key| value.as_object()?.get(*key))
    }

    /// Whether the record is a JSON object at all
    #[must_use]
    pub fn is_object(&self) -> bool {
        self.0.is_object()
    }
}

impl From<JsonValue> for RawRecipe {
    fn from(value: JsonValue) -> Self {
        Self(value)
    }
}
