//! Vocal extraction stage.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::model::download;
use crate::model::separation::SeparationModel;
use crate::model::types::ModelKind;

/// Runs the configured separation model over input files.
///
/// Holds the inference settings from the configuration and the local weight
/// path. The MDX-Net session itself is not wired up yet, so [`extract`]
/// currently passes audio through unchanged.
///
/// [`extract`]: VocalExtractor::extract
pub struct VocalExtractor {
    model: String,
    gpu_conversion: bool,
    segment_size: u32,
    overlap: u32,
    model_path: PathBuf,
}

impl VocalExtractor {
    /// Build the extractor from the `extract-vocal` section and the shared
    /// inference settings.
    pub fn from_config(config: &Config) -> Self {
        let model = config.extract_vocal.model.clone();
        let model_path = SeparationModel.weights_path(&model);

        Self {
            model,
            gpu_conversion: config.gpu_conversion,
            segment_size: config.segment_size,
            overlap: config.overlap,
            model_path,
        }
    }

    /// Name of the configured separation model.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Local path of the model weights.
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Download the model weights when they are not present locally.
    pub fn ensure_model(&self) -> Result<()> {
        download::ensure(&SeparationModel, &self.model)?;
        Ok(())
    }

    /// Separate the vocal stem from `input`.
    ///
    /// Currently returns the input audio unchanged.
    pub fn extract(&self, input: &Path) -> Result<Vec<u8>> {
        // TODO: run MDX-Net inference here (segment_size/overlap windowing,
        // CPU vs GPU session selection) once the ONNX runtime is wired in.
        crate::verbose!(
            "extracting vocals from {} with model '{}' (gpu: {}, segment: {}, overlap: {})",
            input.display(),
            self.model,
            self.gpu_conversion,
            self.segment_size,
            self.overlap
        );

        fs::read(input).with_context(|| format!("failed to read {}", input.display()))
    }
}
