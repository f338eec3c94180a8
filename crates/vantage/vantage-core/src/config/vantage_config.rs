//! Top-level Vantage configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{
    AnalyzerConfig, DedupConfig, DiscoveryConfig, InterpreterConfig, LifecycleConfig,
    SelectionConfig, ValidationConfig,
};
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "vantage.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `CliOverrides`)
/// 2. Environment variables (`VANTAGE_*`)
/// 3. Project config (`vantage.toml` in project root)
/// 4. User config (`~/.vantage/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VantageConfig {
    pub discovery: DiscoveryConfig,
    pub analyzers: AnalyzerConfig,
    pub validation: ValidationConfig,
    pub dedup: DedupConfig,
    pub selection: SelectionConfig,
    pub interpreter: InterpreterConfig,
    pub lifecycle: LifecycleConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub min_videos: Option<usize>,
    pub max_patterns: Option<usize>,
    pub min_evidence: Option<usize>,
    pub min_confidence: Option<f64>,
    pub interpreter_enabled: Option<bool>,
}

impl VantageConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Self::load_with_user_config(root, user_config_path().as_deref(), cli_overrides)
    }

    /// Same as [`VantageConfig::load`] with an explicit user config path.
    pub fn load_with_user_config(
        root: &Path,
        user_config: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut merged = toml::Table::new();

        // Layer 4 (lowest priority): user config. Missing is fine, broken is not.
        if let Some(path) = user_config {
            if path.exists() {
                merge_tables(&mut merged, read_table(path)?);
                debug!(layer = "user", path = %path.display(), "loaded config layer");
            }
        }

        // Layer 3: project config
        let project_path = root.join(PROJECT_CONFIG_FILE);
        if project_path.exists() {
            merge_tables(&mut merged, read_table(&project_path)?);
            debug!(layer = "project", path = %project_path.display(), "loaded config layer");
        }

        let mut config: VantageConfig =
            toml::Value::Table(merged)
                .try_into()
                .map_err(|e: toml::de::Error| ConfigError::ParseError {
                    path: project_path.display().to_string(),
                    message: e.to_string(),
                })?;

        // Layer 2: environment variables
        config.apply_env_overrides();

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config
            .validate()
            .inspect_err(|e| warn!(error = %e, "resolved configuration rejected"))?;
        debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: VantageConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit_interval = [
            ("validation.min_confidence", self.validation.min_confidence),
            ("dedup.template_similarity", self.dedup.template_similarity),
            ("dedup.name_similarity", self.dedup.name_similarity),
            ("dedup.example_similarity", self.dedup.example_similarity),
            ("dedup.group_template_similarity", self.dedup.group_template_similarity),
            ("dedup.group_name_similarity", self.dedup.group_name_similarity),
            ("lifecycle.forecast_growth_decay", self.lifecycle.forecast_growth_decay),
        ];
        for (field, value) in unit_interval {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }

        let positive_counts = [
            ("analyzers.max_examples", self.analyzers.max_examples),
            ("dedup.max_examples", self.dedup.max_examples),
            ("dedup.max_item_ids", self.dedup.max_item_ids),
            ("interpreter.batch_size", self.interpreter.batch_size),
            ("interpreter.max_concurrent_batches", self.interpreter.max_concurrent_batches),
            ("lifecycle.trend_window_weeks", self.lifecycle.trend_window_weeks),
        ];
        for (field, value) in positive_counts {
            if value == 0 {
                return Err(invalid(field, "must be greater than 0"));
            }
        }

        if self.analyzers.ngram_min_len == 0 || self.analyzers.ngram_min_len > self.analyzers.ngram_max_len {
            return Err(invalid(
                "analyzers.ngram_min_len",
                "must be at least 1 and not exceed ngram_max_len",
            ));
        }
        if self.analyzers.confidence_scale <= 0.0 {
            return Err(invalid("analyzers.confidence_scale", "must be greater than 0"));
        }
        if !(0.0..=100.0).contains(&self.lifecycle.saturation_target) {
            return Err(invalid("lifecycle.saturation_target", "must be between 0 and 100"));
        }
        if self.lifecycle.saturation_window_days <= 0 {
            return Err(invalid("lifecycle.saturation_window_days", "must be greater than 0"));
        }
        let step = self.lifecycle.forecast_uncertainty_step;
        if !step.is_finite() || step < 0.0 {
            return Err(invalid("lifecycle.forecast_uncertainty_step", "must be non-negative"));
        }
        if !(0.0..=100.0).contains(&self.lifecycle.forecast_band_floor) {
            return Err(invalid("lifecycle.forecast_band_floor", "must be between 0 and 100"));
        }
        if self.interpreter.timeout_ms == 0 {
            return Err(invalid("interpreter.timeout_ms", "must be greater than 0"));
        }
        if self.interpreter.initial_backoff_ms > self.interpreter.max_backoff_ms {
            return Err(invalid(
                "interpreter.initial_backoff_ms",
                "must not exceed interpreter.max_backoff_ms",
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `VANTAGE_MIN_VIDEOS`, `VANTAGE_MIN_EVIDENCE`, etc.
    fn apply_env_overrides(&mut self) {
        if let Some(v) = env_parse::<usize>("VANTAGE_MIN_VIDEOS") {
            self.discovery.min_videos = v;
        }
        if let Some(v) = env_parse::<u32>("VANTAGE_MIN_DURATION_SECONDS") {
            self.discovery.min_duration_seconds = v;
        }
        if let Some(v) = env_parse::<usize>("VANTAGE_MIN_EVIDENCE") {
            self.validation.min_evidence = v;
        }
        if let Some(v) = env_parse::<f64>("VANTAGE_MIN_CONFIDENCE") {
            self.validation.min_confidence = v;
        }
        if let Some(v) = env_parse::<usize>("VANTAGE_MAX_PATTERNS") {
            self.selection.max_patterns = v;
        }
        if let Some(v) = env_parse::<bool>("VANTAGE_INTERPRETER_ENABLED") {
            self.interpreter.enabled = v;
        }
        if let Some(v) = env_parse::<usize>("VANTAGE_INTERPRETER_BATCH_SIZE") {
            self.interpreter.batch_size = v;
        }
        if let Some(v) = env_parse::<usize>("VANTAGE_INTERPRETER_CONCURRENCY") {
            self.interpreter.max_concurrent_batches = v;
        }
    }

    fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(v) = cli.min_videos {
            self.discovery.min_videos = v;
        }
        if let Some(v) = cli.max_patterns {
            self.selection.max_patterns = v;
        }
        if let Some(v) = cli.min_evidence {
            self.validation.min_evidence = v;
        }
        if let Some(v) = cli.min_confidence {
            self.validation.min_confidence = v;
        }
        if let Some(v) = cli.interpreter_enabled {
            self.interpreter.enabled = v;
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Parse an override variable. Unset is silent; an unparsable value is
/// ignored with a warning.
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => {
            debug!(key, "applied environment override");
            Some(value)
        }
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable environment override");
            None
        }
    }
}

fn read_table(path: &Path) -> Result<toml::Table, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.display().to_string(),
    })?;
    content.parse::<toml::Table>().map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Deep-merge `overlay` into `base`; overlay wins on scalar conflicts.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// `~/.vantage/config.toml`.
fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join(".vantage").join("config.toml"))
}
