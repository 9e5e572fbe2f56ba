pub mod audio;
pub mod batch;
pub mod config;
pub mod http;
pub mod model;
pub mod stage;
pub mod verbose;

pub use config::{Config, StageConfig};
pub use model::{DereverbModel, ModelError, ModelInfo, ModelKind, SeparationModel};
pub use stage::{DereverbStage, VocalExtractor};
pub use verbose::set_verbose;
