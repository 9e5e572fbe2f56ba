//! Shared blocking HTTP client for weight downloads.

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use std::time::Duration;

// Weight files run into the hundreds of megabytes; give slow links headroom.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(600);

static CLIENT: OnceCell<Client> = OnceCell::new();

/// Get the process-wide HTTP client, creating it on first use.
pub fn client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(DOWNLOAD_TIMEOUT)
            .build()
            .context("failed to create HTTP client")
    })
}
