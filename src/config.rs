// src/config.rs
//! Analysis configuration: TOML schema, loading, and fail-fast validation.
//!
//! Everything the core consumes is passed explicitly — there is no hidden
//! global state. A default configuration is embedded in the binary; a file
//! can override it via `ANALYSIS_CONFIG_PATH` or an explicit path.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::filter::FilterConfig;

pub const DEFAULT_CONFIG_PATH: &str = "config/analysis.toml";
pub const ENV_CONFIG_PATH: &str = "ANALYSIS_CONFIG_PATH";

const EMBEDDED_CONFIG: &str = include_str!("../config/analysis.toml");

/// Thresholds for the co-occurrence pass and network ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Neighboring positions considered "near" a token, per side.
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    /// Minimum count required of a pair and of each endpoint word.
    #[serde(default = "default_min_count")]
    pub min_count: usize,
    /// Number of top-ranked edges to keep.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_window_size() -> usize {
    5
}
fn default_min_count() -> usize {
    2
}
fn default_top_n() -> usize {
    30
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            min_count: default_min_count(),
            top_n: default_top_n(),
        }
    }
}

/// Root configuration consumed by [`crate::analyzer::Analyzer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub network: NetworkConfig,
}

impl Default for AnalyzerConfig {
    /// The embedded `config/analysis.toml` defaults.
    fn default() -> Self {
        toml::from_str(EMBEDDED_CONFIG).expect("embedded analysis config is valid")
    }
}

impl AnalyzerConfig {
    /// Parse from a TOML string and validate.
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let cfg: AnalyzerConfig = toml::from_str(toml_str)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from a TOML file.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("failed to read analysis config at {}: {}", path.display(), e)
        })?;
        Self::from_toml_str(&content)
    }

    /// Resolve the config the way deployments expect: `ANALYSIS_CONFIG_PATH`
    /// if set, otherwise `config/analysis.toml` if present, otherwise the
    /// embedded defaults.
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(path) = std::env::var(ENV_CONFIG_PATH) {
            return Self::from_path(&PathBuf::from(path));
        }
        let default = PathBuf::from(DEFAULT_CONFIG_PATH);
        if default.is_file() {
            return Self::from_path(&default);
        }
        Ok(Self::default())
    }

    /// Fail fast on thresholds that would produce silently wrong statistics.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.filter.min_surface_length < 1 {
            return Err(AnalysisError::invalid(
                "filter.min_surface_length must be at least 1",
            ));
        }
        if self.network.window_size < 1 {
            return Err(AnalysisError::invalid(
                "network.window_size must be at least 1",
            ));
        }
        if self.network.min_count < 1 {
            return Err(AnalysisError::invalid(
                "network.min_count must be at least 1",
            ));
        }
        if self.network.top_n < 1 {
            return Err(AnalysisError::invalid("network.top_n must be at least 1"));
        }
        Ok(())
    }
}
