//! Model catalog types shared by the separation and dereverb families.

use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A downloadable model weight file.
#[derive(Debug, Clone, Copy)]
pub struct ModelInfo {
    /// Catalog name, as written in the configuration file.
    pub name: &'static str,
    /// Direct download URL for the weight file.
    pub url: &'static str,
    /// Short human-readable description.
    pub description: &'static str,
}

/// Catalog lookup failures.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The configured model name has no registered download URL.
    #[error("unknown {kind} model '{name}'; known models: {known}")]
    UnknownModel {
        kind: &'static str,
        name: String,
        known: String,
    },
}

/// A family of models sharing a weight directory and file-name scheme.
pub trait ModelKind {
    /// Family label used in logs and errors ("separation", "dereverb").
    fn kind(&self) -> &'static str;

    /// The catalog of models this family can download.
    fn models(&self) -> &'static [ModelInfo];

    /// Directory where this family stores its weight files.
    fn weights_dir(&self) -> PathBuf {
        models_dir()
    }

    /// On-disk file name for a named model's weights.
    fn weights_file_name(&self, model_name: &str) -> String {
        format!("{model_name}.onnx")
    }

    /// Local path of a named model's weights.
    fn weights_path(&self, model_name: &str) -> PathBuf {
        self.weights_dir().join(self.weights_file_name(model_name))
    }

    /// Whether the weights at `path` look usable.
    fn verify(&self, path: &Path) -> bool {
        path.exists() && path.is_file()
    }

    /// Look up a model by name. Fails before any filesystem or network
    /// activity when the name is not in the catalog.
    fn find(&self, name: &str) -> Result<&'static ModelInfo, ModelError> {
        self.models()
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| ModelError::UnknownModel {
                kind: self.kind(),
                name: name.to_string(),
                known: self
                    .models()
                    .iter()
                    .map(|m| m.name)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Resolve the local weights directory.
///
/// `VOXSEP_MODELS_DIR` overrides the platform default.
pub fn models_dir() -> PathBuf {
    if let Some(dir) = env::var_os("VOXSEP_MODELS_DIR") {
        return PathBuf::from(dir);
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("voxsep")
        .join("models")
}
