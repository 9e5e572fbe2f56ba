//! Model weight management.
//!
//! ```text
//! ModelKind trait
//!   ├── SeparationModel - MDX-Net vocal separation weights
//!   └── DereverbModel   - reverb removal weights
//!
//! download
//!   ├── ensure()   - download if missing
//!   └── download() - streamed GET with progress
//! ```
//!
//! Weight files live under a single local directory (see
//! [`types::models_dir`]) and are fetched from the catalog URL the first time
//! a model is used.

pub mod dereverb;
pub mod download;
pub mod separation;
pub mod types;

pub use dereverb::DereverbModel;
pub use separation::SeparationModel;
pub use types::{ModelError, ModelInfo, ModelKind, models_dir};
