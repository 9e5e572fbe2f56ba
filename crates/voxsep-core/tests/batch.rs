//! End-to-end batch runs over a seeded directory.
//!
//! Model weights are pre-placed in a temp directory pointed to by
//! `VOXSEP_MODELS_DIR`, so no run here ever reaches the network.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use tempfile::TempDir;
use voxsep_core::{Config, StageConfig, batch};

// Set the models dir once for the whole test binary; tests only read the
// variable afterwards.
static MODELS_DIR: LazyLock<TempDir> = LazyLock::new(|| {
    let dir = tempfile::tempdir().unwrap();
    unsafe { std::env::set_var("VOXSEP_MODELS_DIR", dir.path()) };
    dir
});

fn place_weights(name: &str) {
    fs::write(MODELS_DIR.path().join(name), b"weights").unwrap();
}

fn config(dereverb: Option<&str>) -> Config {
    Config {
        extract_vocal: StageConfig {
            model: "MDX23C-InstVoc HQ".to_string(),
        },
        dereverb_vocal: dereverb.map(|model| StageConfig {
            model: model.to_string(),
        }),
        gpu_conversion: false,
        segment_size: 4000,
        overlap: 99,
    }
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn produces_one_processed_copy_per_audio_file() {
    place_weights("MDX23C-InstVoc HQ.onnx");
    place_weights("Reverb HQ.onnx");

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("track.wav"), b"RIFF bytes").unwrap();
    fs::write(dir.path().join("song.mp3"), b"ID3 bytes").unwrap();
    fs::write(dir.path().join("liner-notes.txt"), b"not audio").unwrap();

    batch::run(dir.path(), &config(Some("Reverb HQ"))).unwrap();

    assert_eq!(
        file_names(dir.path()),
        [
            "liner-notes.txt",
            "processed_song.mp3",
            "processed_track.wav",
            "song.mp3",
            "track.wav",
        ]
    );

    // The stages are pass-through, so each copy matches its input.
    assert_eq!(
        fs::read(dir.path().join("processed_track.wav")).unwrap(),
        b"RIFF bytes"
    );
    assert_eq!(
        fs::read(dir.path().join("processed_song.mp3")).unwrap(),
        b"ID3 bytes"
    );
}

#[test]
fn runs_without_a_dereverb_stage() {
    place_weights("MDX23C-InstVoc HQ.onnx");

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("take.flac"), b"fLaC bytes").unwrap();

    batch::run(dir.path(), &config(None)).unwrap();

    assert_eq!(
        fs::read(dir.path().join("processed_take.flac")).unwrap(),
        b"fLaC bytes"
    );
}

#[test]
fn an_empty_directory_is_not_an_error() {
    place_weights("MDX23C-InstVoc HQ.onnx");

    let dir = tempfile::tempdir().unwrap();
    batch::run(dir.path(), &config(None)).unwrap();

    assert!(file_names(dir.path()).is_empty());
}

#[test]
fn an_unknown_extraction_model_aborts_before_any_output() {
    // Touch the shared models dir so the env variable is set exactly once
    // before this test reads it.
    LazyLock::force(&MODELS_DIR);

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("track.wav"), b"RIFF bytes").unwrap();

    let mut cfg = config(None);
    cfg.extract_vocal.model = "No Such Model".to_string();

    let err = batch::run(dir.path(), &cfg).unwrap_err();

    assert!(err.to_string().contains("unknown separation model"));
    assert_eq!(file_names(dir.path()), ["track.wav"]);
}
