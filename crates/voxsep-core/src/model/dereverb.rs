//! Dereverberation model family.

use super::types::{ModelInfo, ModelKind};

const MODELS: &[ModelInfo] = &[ModelInfo {
    name: "Reverb HQ",
    url: "https://github.com/TRvlvr/model_repo/releases/download/all_public_uvr_models/Reverb_HQ_By_FoxJoy.onnx",
    description: "MDX reverb removal by FoxJoy",
}];

/// Dereverberation model family.
pub struct DereverbModel;

impl ModelKind for DereverbModel {
    fn kind(&self) -> &'static str {
        "dereverb"
    }

    fn models(&self) -> &'static [ModelInfo] {
        MODELS
    }
}
