// ABOUTME: Filter query model for title search plus cuisine and diet constraints
// ABOUTME: LabelFilter folds the "any"/"all" sentinels into an explicit Any variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::filters::{ALL, ANY};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Constraint on one label axis (cuisine or diet)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LabelFilter {
    /// No constraint
    #[default]
    Any,
    /// Recipe must carry this lower-cased label
    Only(String),
}

impl LabelFilter {
    /// Parse a user-facing value. Blank, `any` and `all` (any case) mean no constraint.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let normalized = value.trim().to_lowercase();
        if normalized.is_empty() || normalized == ANY || normalized == ALL {
            Self::Any
        } else {
            Self::Only(normalized)
        }
    }

    /// The required label, if constrained
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::Only(label) => Some(label),
        }
    }

    /// True for the no-constraint variant
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl From<String> for LabelFilter {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for LabelFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<Option<&str>> for LabelFilter {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Any, Self::parse)
    }
}

impl From<LabelFilter> for String {
    fn from(filter: LabelFilter) -> Self {
        match filter {
            LabelFilter::Any => ANY.to_owned(),
            LabelFilter::Only(label) => label,
        }
    }
}

impl fmt::Display for LabelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or(ANY))
    }
}

/// Three-axis recipe filter. Axes combine with logical AND.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterQuery {
    /// Case-insensitive title substring; empty matches everything
    pub search_text: String,
    /// Cuisine constraint
    pub cuisine: LabelFilter,
    /// Diet constraint
    pub diet: LabelFilter,
}

impl FilterQuery {
    /// The identity query: matches every recipe
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search text
    #[must_use]
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Replace the cuisine constraint
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<LabelFilter>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    /// Replace the diet constraint
    #[must_use]
    pub fn with_diet(mut self, diet: impl Into<LabelFilter>) -> Self {
        self.diet = diet.into();
        self
    }

    /// Whether this query constrains nothing
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.search_text.is_empty() && self.cuisine.is_any() && self.diet.is_any()
    }
}
