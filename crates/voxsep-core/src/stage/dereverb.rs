//! Dereverberation stage.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::model::dereverb::DereverbModel;
use crate::model::download;
use crate::model::types::ModelKind;

/// Removes reverberation from separated vocals.
///
/// Like the extractor, this is path bookkeeping plus a download check; the
/// model inference is not hooked up yet and [`apply`] passes audio through.
///
/// [`apply`]: DereverbStage::apply
pub struct DereverbStage {
    model: String,
    model_path: PathBuf,
}

impl DereverbStage {
    pub fn new(model: &str) -> Self {
        Self {
            model: model.to_string(),
            model_path: DereverbModel.weights_path(model),
        }
    }

    /// Name of the configured dereverb model.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Local path of the model weights.
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Download the model weights when they are not present locally.
    pub fn ensure_model(&self) -> Result<()> {
        download::ensure(&DereverbModel, &self.model)?;
        Ok(())
    }

    /// Remove reverberation from `audio`.
    pub fn apply(&self, audio: Vec<u8>) -> Result<Vec<u8>> {
        crate::verbose!("applying dereverb with model '{}'", self.model);
        Ok(audio)
    }
}
