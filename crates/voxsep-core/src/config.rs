//! Batch-run configuration loaded from a YAML file.
//!
//! # Example
//!
//! ```yaml
//! extract-vocal:
//!   model: "MDX23C-InstVoc HQ"
//! dereverb-vocal:
//!   model: "Reverb HQ"
//! gpu_conversion: true
//! segment_size: 4000
//! overlap: 99
//! ```
//!
//! Only the `extract-vocal` section is required; everything else falls back
//! to defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Model selection for a single processing stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageConfig {
    /// Catalog name of the model to run.
    pub model: String,
}

/// Top-level batch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Vocal separation stage (required).
    #[serde(rename = "extract-vocal")]
    pub extract_vocal: StageConfig,

    /// Dereverberation stage applied after separation, when present.
    #[serde(rename = "dereverb-vocal", default)]
    pub dereverb_vocal: Option<StageConfig>,

    /// Run inference on the GPU when available.
    #[serde(default = "default_gpu_conversion")]
    pub gpu_conversion: bool,

    /// Samples per inference window.
    #[serde(default = "default_segment_size")]
    pub segment_size: u32,

    /// Overlap between adjacent inference windows.
    #[serde(default = "default_overlap")]
    pub overlap: u32,
}

fn default_gpu_conversion() -> bool {
    true
}

fn default_segment_size() -> u32 {
    4000
}

fn default_overlap() -> u32 {
    99
}

impl Config {
    /// Load a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse as a
    /// valid configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_yaml::from_str(&data)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }
}
