// ABOUTME: Normalized recipe entity and its typed field containers
// ABOUTME: Recipe, LabelSet, Nutrients, NutrientAmount, and the UntrustedHtml summary wrapper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{aggregation::HEALTHY_SCORE_THRESHOLD, nutrients};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Recipe identifier assigned by the search API
pub type RecipeId = u64;

/// A validated recipe.
///
/// Only the normalizer builds these from API data; a `Recipe` always has a
/// non-blank title. Every other field may be unknown and is typed so that
/// "unknown" is distinguishable from a real zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// API identifier; `None` when the record carried no usable integer id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecipeId>,
    /// Display title
    pub title: String,
    /// Lower-cased cuisine labels in source order
    pub cuisines: LabelSet,
    /// Lower-cased diet labels in source order
    pub diets: LabelSet,
    /// Health score, conventionally 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_score: Option<u32>,
    /// Nutrient amounts keyed by exact nutrient name
    pub nutrients: Nutrients,
    /// Image URL (passthrough)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Preparation time in minutes (passthrough)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    /// Number of servings (passthrough)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// HTML summary from the API, never rendered as-is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<UntrustedHtml>,
}

impl Recipe {
    /// Create a recipe with only a title; all optional fields unknown
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            cuisines: LabelSet::default(),
            diets: LabelSet::default(),
            health_score: None,
            nutrients: Nutrients::default(),
            image: None,
            ready_in_minutes: None,
            servings: None,
            summary: None,
        }
    }

    /// Amount of a nutrient by exact name
    #[must_use]
    pub fn nutrient(&self, name: &str) -> Option<f64> {
        self.nutrients.amount(name)
    }

    /// Calories, if reported
    #[must_use]
    pub fn calories(&self) -> Option<f64> {
        self.nutrient(nutrients::CALORIES)
    }

    /// Known health score at or above the healthy threshold.
    /// Unknown scores are never healthy.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.health_score
            .is_some_and(|score| score >= HEALTHY_SCORE_THRESHOLD)
    }
}

/// Ordered set of lower-cased labels (cuisines or diets).
///
/// Insertion order is kept so histogram tie-breaking stays deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet(Vec<String>);

impl LabelSet {
    /// Build a set from raw labels: trimmed, lower-cased, empties dropped, duplicates collapsed
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for label in labels {
            set.insert(label.as_ref());
        }
        set
    }

    /// Insert a label after normalizing it. Returns `false` if it was blank or already present.
    pub fn insert(&mut self, label: &str) -> bool {
        let normalized = label.trim().to_lowercase();
        if normalized.is_empty() || self.0.contains(&normalized) {
            return false;
        }
        self.0.push(normalized);
        true
    }

    /// Membership test; the probe is lower-cased before comparing
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        let probe = label.trim().to_lowercase();
        self.0.iter().any(|existing| *existing == probe)
    }

    /// Iterate labels in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of labels
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No labels known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A nutrient measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientAmount {
    /// Non-negative, finite amount
    pub amount: f64,
    /// Unit as reported (e.g. "kcal", "g")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Nutrient name to amount mapping. A missing nutrient has no entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nutrients(BTreeMap<String, NutrientAmount>);

impl Nutrients {
    /// Record a nutrient unless one with the same name was already recorded.
    /// Returns `true` when the entry was stored.
    pub fn insert_first(&mut self, name: impl Into<String>, amount: NutrientAmount) -> bool {
        let name = name.into();
        if self.0.contains_key(&name) {
            return false;
        }
        self.0.insert(name, amount);
        true
    }

    /// Amount for an exact nutrient name
    #[must_use]
    pub fn amount(&self, name: &str) -> Option<f64> {
        self.0.get(name).map(|nutrient| nutrient.amount)
    }

    /// Full entry for an exact nutrient name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NutrientAmount> {
        self.0.get(name)
    }

    /// Iterate entries ordered by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NutrientAmount)> {
        self.0.iter().map(|(name, amount)| (name.as_str(), amount))
    }

    /// Number of known nutrients
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No nutrients known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// HTML text from an external source.
///
/// The raw markup is reachable only through [`UntrustedHtml::as_raw`]; callers
/// rendering into HTML use [`UntrustedHtml::escaped`], terminals use
/// [`UntrustedHtml::plain_text`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UntrustedHtml(String);

impl UntrustedHtml {
    /// Wrap untrusted markup
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// The markup exactly as received
    #[must_use]
    pub fn as_raw(&self) -> &str {
        &self.0
    }

    /// Markup escaped for safe inclusion as HTML text content
    #[must_use]
    pub fn escaped(&self) -> Cow<'_, str> {
        html_escape::encode_text(&self.0)
    }

    /// Tags removed, entities decoded, whitespace collapsed
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut stripped = String::with_capacity(self.0.len());
        let mut in_tag = false;
        for ch in self.0.chars() {
            match ch {
                '<' => in_tag = true,
                '>' if in_tag => {
                    in_tag = false;
                    stripped.push(' ');
                }
                _ if !in_tag => stripped.push(ch),
                _ => {}
            }
        }
        let decoded = html_escape::decode_html_entities(&stripped);
        decoded.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Whether there is no visible text
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.plain_text().is_empty()
    }
}
