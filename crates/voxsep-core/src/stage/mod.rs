//! Audio processing stages.
//!
//! Each stage owns its model name and local weight path and knows how to
//! make the weights available. Inference is not implemented yet; both stages
//! currently pass audio through unchanged.

mod dereverb;
mod extractor;

pub use dereverb::DereverbStage;
pub use extractor::VocalExtractor;
