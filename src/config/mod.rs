use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::names;
use crate::symbol::FqName;

pub const FAIL_FAST: &str = "bindery.fail-fast";
pub const QUALIFIER_MARKERS: &str = "bindery.qualifier-markers";
pub const MAP_KEY_MARKERS: &str = "bindery.map-key-markers";
pub const CONTRIBUTES_BINDING: &str = "bindery.contributes-binding";
pub const CONTRIBUTES_MULTIBINDING: &str = "bindery.contributes-multibinding";
pub const CONTRIBUTES_TO: &str = "bindery.contributes-to";

const ENV_PREFIX: &str = "BINDERY_";

/// Raw processor options as handed over by the host, e.g. `ksp { arg("bindery.fail-fast", "true") }`.
#[derive(Debug, Clone, Default)]
pub struct ProcessorOptions {
    options: Arc<DashMap<String, String>>,
}

impl ProcessorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options from `BINDERY_*` environment variables.
    ///
    /// `BINDERY_FAIL_FAST=true` becomes `bindery.fail-fast=true`.
    pub fn from_env() -> Self {
        let options = Self::default();
        for (key, value) in env::vars() {
            if let Some(rest) = key.strip_prefix(ENV_PREFIX) {
                options.set(&env_key_to_option(rest), &value);
            }
        }
        options
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.options.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.options.insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProcessorOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let options = Self::default();
        for (key, value) in iter {
            options.options.insert(key.into(), value.into());
        }
        options
    }
}

fn env_key_to_option(rest: &str) -> String {
    format!("bindery.{}", rest.to_ascii_lowercase().replace('_', "-"))
}

/// Meta-annotations that give an annotation class its role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationVocabulary {
    pub qualifier_markers: Vec<FqName>,
    pub map_key_markers: Vec<FqName>,
}

impl Default for AnnotationVocabulary {
    fn default() -> Self {
        Self {
            qualifier_markers: vec![
                FqName::new(names::JAVAX_QUALIFIER),
                FqName::new(names::JAKARTA_QUALIFIER),
            ],
            map_key_markers: vec![FqName::new(names::MAP_KEY)],
        }
    }
}

/// Qualified names of the contribution annotations the processor reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionAnnotations {
    pub contributes_binding: FqName,
    pub contributes_multibinding: FqName,
    pub contributes_to: FqName,
}

impl Default for ContributionAnnotations {
    fn default() -> Self {
        Self {
            contributes_binding: FqName::new(names::CONTRIBUTES_BINDING),
            contributes_multibinding: FqName::new(names::CONTRIBUTES_MULTIBINDING),
            contributes_to: FqName::new(names::CONTRIBUTES_TO),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Abort the whole round at the first diagnostic instead of skipping the declaration.
    pub fail_fast: bool,
    pub vocabulary: AnnotationVocabulary,
    pub annotations: ContributionAnnotations,
}

impl ProcessorConfig {
    /// Parse typed configuration out of raw options. Unknown keys are ignored.
    ///
    /// # Errors
    /// Returns an error for a non boolean `fail-fast` value or an empty name list.
    pub fn from_options(options: &ProcessorOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = options.get(FAIL_FAST) {
            config.fail_fast = parse_bool(FAIL_FAST, &value)?;
        }
        if let Some(value) = options.get(QUALIFIER_MARKERS) {
            config.vocabulary.qualifier_markers = parse_names(QUALIFIER_MARKERS, &value)?;
        }
        if let Some(value) = options.get(MAP_KEY_MARKERS) {
            config.vocabulary.map_key_markers = parse_names(MAP_KEY_MARKERS, &value)?;
        }
        if let Some(value) = options.get(CONTRIBUTES_BINDING) {
            config.annotations.contributes_binding = parse_name(CONTRIBUTES_BINDING, &value)?;
        }
        if let Some(value) = options.get(CONTRIBUTES_MULTIBINDING) {
            config.annotations.contributes_multibinding =
                parse_name(CONTRIBUTES_MULTIBINDING, &value)?;
        }
        if let Some(value) = options.get(CONTRIBUTES_TO) {
            config.annotations.contributes_to = parse_name(CONTRIBUTES_TO, &value)?;
        }

        Ok(config)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_name(key: &str, value: &str) -> Result<FqName, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::Empty { key: key.to_string() });
    }
    Ok(FqName::new(value))
}

fn parse_names(key: &str, value: &str) -> Result<Vec<FqName>, ConfigError> {
    let names: Vec<FqName> = value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(FqName::new)
        .collect();
    if names.is_empty() {
        return Err(ConfigError::Empty { key: key.to_string() });
    }
    Ok(names)
}
