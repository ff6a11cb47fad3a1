use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A detected food item, identified by its normalized text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ingredient(String);

impl Ingredient {
    /// Lowercases the label, turns hyphens into spaces and collapses runs of
    /// whitespace. Returns `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw
            .to_lowercase()
            .replace('-', " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Union of every label recognized across the submitted images.
///
/// Backed by a `BTreeSet` so iteration, query strings and prompts are
/// deterministic regardless of the order images were processed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSet(BTreeSet<Ingredient>);

impl IngredientSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes and inserts a raw label. Returns `true` if it was new.
    pub fn insert_label(&mut self, raw: &str) -> bool {
        match Ingredient::parse(raw) {
            Some(ingredient) => self.0.insert(ingredient),
            None => false,
        }
    }

    pub fn extend_labels<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for label in labels {
            self.insert_label(label.as_ref());
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        Ingredient::parse(label).is_some_and(|i| self.0.contains(&i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.0.iter()
    }

    pub fn join(&self, separator: &str) -> String {
        self.0
            .iter()
            .map(Ingredient::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().map(|i| i.as_str().to_string()).collect()
    }
}

/// An image that contributed nothing to the ingredient set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImageFailure {
    /// Position of the image in the request.
    pub index: usize,
    pub reason: String,
}
