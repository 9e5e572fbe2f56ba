//! Download-if-missing operations, generic over a [`ModelKind`].

use anyhow::{Context, Result, anyhow};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use super::types::ModelKind;
use crate::http;

/// Ensure a model's weights exist locally, downloading them when absent.
///
/// Returns the local weight path. An unknown model name fails before any
/// filesystem or network activity.
pub fn ensure(kind: &dyn ModelKind, name: &str) -> Result<PathBuf> {
    ensure_in(kind, name, &kind.weights_dir())
}

/// Like [`ensure`], with an explicit weights directory.
pub fn ensure_in(kind: &dyn ModelKind, name: &str, dir: &Path) -> Result<PathBuf> {
    let info = kind.find(name)?;

    let dest = dir.join(kind.weights_file_name(name));
    if kind.verify(&dest) {
        crate::verbose!(
            "{} model '{name}' already present at {}",
            kind.kind(),
            dest.display()
        );
        return Ok(dest);
    }

    eprintln!("{} model '{name}' not found locally, downloading", kind.kind());
    eprintln!("  {} -> {}", info.url, dest.display());
    download(info.url, &dest)?;

    Ok(dest)
}

/// Download `url` to `dest` with a percentage progress line on stderr.
pub fn download(url: &str, dest: &Path) -> Result<()> {
    download_with_progress(url, dest, |downloaded, total| {
        let percent = if total > 0 { downloaded * 100 / total } else { 0 };
        eprint!(
            "\rdownloading: {percent}% ({:.1} MB / {:.1} MB)  ",
            downloaded as f64 / 1_000_000.0,
            total as f64 / 1_000_000.0
        );
        io::stderr().flush().ok();
    })?;

    eprintln!("\rdownload complete: {}                    ", dest.display());
    Ok(())
}

/// Download `url` to `dest`, reporting progress through a callback.
///
/// The callback receives `(downloaded_bytes, total_bytes)` roughly every 1%
/// of progress or 500 KB, whichever is more frequent. The body is streamed to
/// a `.part` file and renamed into place once complete.
pub fn download_with_progress<F>(url: &str, dest: &Path, on_progress: F) -> Result<()>
where
    F: Fn(u64, u64),
{
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).context("failed to create models directory")?;
    }

    let client = http::client()?;
    let mut response = client
        .get(url)
        .send()
        .with_context(|| format!("failed to start download from {url}"))?;

    if !response.status().is_success() {
        return Err(anyhow!("download of {url} failed: HTTP {}", response.status()));
    }

    let total = response.content_length().unwrap_or(0);

    let part = part_path(dest);
    let mut file = fs::File::create(&part)
        .with_context(|| format!("failed to create {}", part.display()))?;

    let mut downloaded: u64 = 0;
    let mut last_report: u64 = 0;
    let mut buf = [0u8; 8192];

    on_progress(0, total);

    loop {
        let n = response.read(&mut buf).context("download interrupted")?;
        if n == 0 {
            break;
        }

        file.write_all(&buf[..n])
            .context("failed to write weights file")?;
        downloaded += n as u64;

        let step = if total > 0 {
            (total / 100).min(500_000)
        } else {
            500_000
        };

        if downloaded - last_report >= step {
            on_progress(downloaded, total);
            last_report = downloaded;
        }
    }

    on_progress(downloaded, total);

    file.sync_all().context("failed to flush weights file")?;
    drop(file);

    fs::rename(&part, dest).context("failed to finalize download")?;
    Ok(())
}

/// Temp-file path used while a download is in flight.
fn part_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().map(ToOwned::to_owned).unwrap_or_default();
    name.push(".part");
    dest.with_file_name(name)
}
