//! Vocal separation model family (MDX-Net).

use super::types::{ModelInfo, ModelKind};

/// Separation models published in the public UVR model repository.
const MODELS: &[ModelInfo] = &[
    ModelInfo {
        name: "MDX23C-InstVoc HQ",
        url: "https://github.com/TRvlvr/model_repo/releases/download/all_public_uvr_models/UVR-MDX-NET-Inst_HQ_1.onnx",
        description: "Instrumental/vocal split, high quality",
    },
    ModelInfo {
        name: "UVR-MDX-NET Karaoke 2",
        url: "https://github.com/TRvlvr/model_repo/releases/download/all_public_uvr_models/UVR_MDXNET_KARA_2.onnx",
        description: "Lead vocal isolation, keeps backing vocals",
    },
    ModelInfo {
        name: "UVR-MDX-NET Voc FT",
        url: "https://github.com/TRvlvr/model_repo/releases/download/all_public_uvr_models/UVR-MDX-NET-Voc_FT.onnx",
        description: "Fine-tuned vocal model",
    },
];

/// Vocal separation model family.
pub struct SeparationModel;

impl ModelKind for SeparationModel {
    fn kind(&self) -> &'static str {
        "separation"
    }

    fn models(&self) -> &'static [ModelInfo] {
        MODELS
    }
}
