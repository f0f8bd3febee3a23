//! Dataset retrieval over HTTP.
//!
//! This module downloads the monarch dataset and deserializes it into raw
//! records. Network faults are the only recoverable errors in the tool, so
//! the bounded retry loop lives here and nowhere else.

use crate::models::Monarch;
use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// The public gist the dataset is served from.
pub const DEFAULT_DATASET_URL: &str = "https://gist.githubusercontent.com/christianpanton/10d65ccef9f29de3acd49d97ed423736/raw/b09563bc0c4b318132c7a738e679d4f984ef0048/kings";

/// Options for fetching the dataset.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// Number of attempts before giving up.
    pub retries: usize,
    /// Whether to show a progress spinner.
    pub show_progress: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            retries: 3,
            show_progress: true,
        }
    }
}

/// Fetch the dataset from `url` and deserialize it.
pub async fn fetch_dataset(url: &str, options: &FetchOptions) -> Result<Vec<Monarch>> {
    info!("Fetching dataset: {}", url);

    let client = Client::builder()
        .timeout(Duration::from_secs(options.timeout_seconds))
        .build()
        .context("Failed to build HTTP client")?;

    let spinner = if options.show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(format!("Downloading {}", url));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let attempts = options.retries.max(1);
    let mut last_error = None;

    for attempt in 1..=attempts {
        debug!("Fetch attempt {}/{}", attempt, attempts);

        match try_fetch(&client, url).await {
            Ok(monarchs) => {
                if let Some(pb) = spinner {
                    pb.finish_with_message(format!("Downloaded {} records", monarchs.len()));
                }
                info!("Fetched {} monarch records", monarchs.len());
                return Ok(monarchs);
            }
            Err(e) => {
                warn!("Fetch attempt {}/{} failed: {}", attempt, attempts, e);
                last_error = Some(e);
            }
        }
    }

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    Err(last_error.unwrap_or_else(|| anyhow!("Dataset fetch failed")))
        .with_context(|| format!("Failed to fetch dataset from {} after {} attempts", url, attempts))
}

/// One fetch attempt: GET, status check, JSON deserialization.
async fn try_fetch(client: &Client, url: &str) -> Result<Vec<Monarch>> {
    let response = client
        .get(url)
        .send()
        .await
        .context("Request failed")?
        .error_for_status()
        .context("Server returned an error status")?;

    // The gist serves text/plain; Response::json deserializes regardless.
    let monarchs: Vec<Monarch> = response
        .json()
        .await
        .context("Failed to deserialize dataset JSON")?;

    Ok(monarchs)
}

/// Parse a dataset from a JSON string.
pub fn parse_dataset(json: &str) -> Result<Vec<Monarch>> {
    let monarchs: Vec<Monarch> =
        serde_json::from_str(json).context("Failed to deserialize dataset JSON")?;
    Ok(monarchs)
}

/// Load a dataset from a local JSON file.
pub fn load_local(path: &Path) -> Result<Vec<Monarch>> {
    info!("Loading local dataset: {}", path.display());

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;

    parse_dataset(&content)
}
