//! Sequential batch driver.
//!
//! One linear flow: build the stages, make sure their weights exist, then
//! walk the directory once. The first failure aborts the run.

use anyhow::Result;
use std::path::Path;

use crate::audio;
use crate::config::Config;
use crate::stage::{DereverbStage, VocalExtractor};

/// Process every audio file in `directory` according to `config`.
///
/// Each input produces one output named `processed_<name>` in the same
/// directory.
pub fn run(directory: &Path, config: &Config) -> Result<()> {
    let extractor = VocalExtractor::from_config(config);
    extractor.ensure_model()?;

    let dereverb = match &config.dereverb_vocal {
        Some(stage) => {
            let stage = DereverbStage::new(&stage.model);
            stage.ensure_model()?;
            Some(stage)
        }
        None => None,
    };

    let files = audio::list_audio_files(directory)?;
    if files.is_empty() {
        eprintln!("no audio files found in {}", directory.display());
    }

    let total = files.len();
    for (idx, input) in files.iter().enumerate() {
        eprintln!("Processing {}/{}: {}", idx + 1, total, input.display());

        let mut processed = extractor.extract(input)?;
        if let Some(stage) = &dereverb {
            processed = stage.apply(processed)?;
        }

        audio::save_audio(&processed, &audio::output_path(input))?;
    }

    eprintln!("Batch processing complete.");
    Ok(())
}
