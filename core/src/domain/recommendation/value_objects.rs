use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError, ingredient::value_objects::ImageSource,
};

/// Caller-supplied weights keyed by ingredient substring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PreferenceMap(BTreeMap<String, f64>);

impl PreferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, weight: f64) -> Result<(), CoreError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(CoreError::InvalidPreference(
                "preference keys must not be empty".to_string(),
            ));
        }
        if !weight.is_finite() {
            return Err(CoreError::InvalidPreference(format!(
                "weight for '{}' must be a finite number",
                key
            )));
        }
        self.0.insert(key, weight);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, w)| (k.as_str(), *w))
    }

    /// Bumps the weight of every keyword by one, starting unseen keywords at one.
    pub fn record_keywords<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            let keyword = keyword.as_ref().trim();
            if keyword.is_empty() {
                continue;
            }
            *self.0.entry(keyword.to_string()).or_insert(0.0) += 1.0;
        }
    }
}

impl TryFrom<serde_json::Value> for PreferenceMap {
    type Error = CoreError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let entries = match value {
            serde_json::Value::Null => return Ok(Self::new()),
            serde_json::Value::Object(entries) => entries,
            other => {
                return Err(CoreError::InvalidPreference(format!(
                    "preferences must be an object of ingredient to weight, got {}",
                    json_type_name(&other)
                )));
            }
        };

        let mut preferences = Self::new();
        for (key, weight) in entries {
            let weight = weight.as_f64().ok_or_else(|| {
                CoreError::InvalidPreference(format!(
                    "weight for '{}' must be a number, got {}",
                    key,
                    json_type_name(&weight)
                ))
            })?;
            preferences.insert(key, weight)?;
        }

        Ok(preferences)
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[derive(Debug, Clone)]
pub struct RecommendInput {
    pub images: Vec<ImageSource>,
    pub preferences: PreferenceMap,
}
