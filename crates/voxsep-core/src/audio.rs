//! Locating input audio files and writing processed copies.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions recognized as processable audio.
pub const AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3", "flac"];

/// List the audio files directly inside `dir`, sorted by name.
///
/// Only regular files with a recognized extension are returned;
/// subdirectories are not descended into. Extension matching is
/// case-insensitive.
pub fn list_audio_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read an entry in {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        if extension
            .as_deref()
            .is_some_and(|e| AUDIO_EXTENSIONS.contains(&e))
        {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Output path for a processed file: `processed_<name>` beside the input.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from("processed_");
    if let Some(base) = input.file_name() {
        name.push(base);
    }
    input.with_file_name(name)
}

/// Write processed audio bytes to `dest`.
pub fn save_audio(data: &[u8], dest: &Path) -> Result<()> {
    crate::verbose!("saving processed audio to {}", dest.display());
    fs::write(dest, data).with_context(|| format!("failed to write {}", dest.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_keeps_only_recognized_extensions() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["one.wav", "two.mp3", "three.flac", "notes.txt", "cover.png"] {
            fs::write(dir.path().join(name), b"data").unwrap();
        }

        let files = list_audio_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();

        assert_eq!(names, ["one.wav", "three.flac", "two.mp3"]);
    }

    #[test]
    fn listing_matches_extensions_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("SHOUTY.WAV"), b"data").unwrap();

        let files = list_audio_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn listing_skips_directories_with_audio_extensions() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("folder.wav")).unwrap();
        fs::write(dir.path().join("real.wav"), b"data").unwrap();

        let files = list_audio_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("real.wav"));
    }

    #[test]
    fn output_path_prefixes_the_file_name_in_place() {
        let out = output_path(Path::new("/music/track.wav"));
        assert_eq!(out, Path::new("/music/processed_track.wav"));
    }

    #[test]
    fn save_audio_writes_the_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("processed_track.wav");

        save_audio(b"stem bytes", &dest).unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"stem bytes");
    }
}
