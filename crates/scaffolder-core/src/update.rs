//! Best-effort check for a newer release of the running CLI
//!
//! The lookup runs as a background task started before the first prompt.
//! Any failure (offline, HTTP error, unparsable version) yields no notice.

use crate::product::ProductConfig;
use anyhow::{Context, Result};
use semver::Version;
use serde::Deserialize;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use url::Url;

/// Hard limit for the registry request
const UPDATE_CHECK_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Deserialize)]
struct CrateResponse {
    #[serde(rename = "crate")]
    krate: CrateInfo,
}

#[derive(Debug, Deserialize)]
struct CrateInfo {
    #[serde(default)]
    max_stable_version: Option<String>,
    max_version: String,
}

impl CrateInfo {
    fn latest(&self) -> &str {
        self.max_stable_version
            .as_deref()
            .unwrap_or(&self.max_version)
    }
}

/// Compare the running version against the latest published one
/// Returns a notice if a strictly newer version exists
pub fn newer_release(current: &str, latest: &str, upgrade_command: &str) -> Option<String> {
    let current_ver = parse_version(current).ok()?;
    let latest_ver = parse_version(latest).ok()?;

    if latest_ver > current_ver {
        Some(format!(
            "Update available {} -> {}. Run: {}",
            current_ver, latest_ver, upgrade_command
        ))
    } else {
        None
    }
}

/// Parse version string, tolerating a leading 'v'
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.strip_prefix('v').unwrap_or(version_str);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

/// Build `<base>/api/v1/crates/<name>`, preserving query parameters
pub fn crate_url(base: &Url, name: &str) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| anyhow::anyhow!("URL cannot have path segments: {}", base))?
        .pop_if_empty()
        .extend(["api", "v1", "crates", name]);
    Ok(url)
}

async fn fetch_latest(client: &reqwest::Client, url: Url) -> Result<String> {
    let response = client
        .get(url.clone())
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .with_context(|| format!("Failed to query {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Failed to query {}: HTTP {}", url, response.status());
    }

    let body: CrateResponse = response.json().await.context("Failed to parse registry response")?;
    Ok(body.krate.latest().to_string())
}

fn is_disabled(env_name: &str) -> bool {
    std::env::var_os(env_name).is_some()
}

/// Handle to a running update check
pub struct UpdateCheck {
    handle: JoinHandle<Option<String>>,
}

impl UpdateCheck {
    /// Start the check in the background
    ///
    /// Returns `None` when the product's opt-out env var is set or the
    /// registry URL is invalid. Must be called inside a tokio runtime.
    pub fn spawn<C: ProductConfig>(config: &C, current_version: &str) -> Option<Self> {
        if is_disabled(config.update_check_env()) {
            return None;
        }

        let base = std::env::var(config.registry_url_env())
            .unwrap_or_else(|_| config.crate_registry_url().to_string());
        let url = Url::parse(&base)
            .ok()
            .and_then(|base| crate_url(&base, config.name()).ok())?;

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .timeout(UPDATE_CHECK_TIMEOUT)
            .build()
            .ok()?;

        let current = current_version.to_string();
        let upgrade = config.upgrade_command();

        let handle = tokio::spawn(async move {
            let latest = fetch_latest(&client, url).await.ok()?;
            newer_release(&current, &latest, upgrade)
        });

        Some(Self { handle })
    }

    /// Wait at most `grace` for the result; abandons the check afterwards
    pub async fn notice(mut self, grace: Duration) -> Option<String> {
        match timeout(grace, &mut self.handle).await {
            Ok(Ok(notice)) => notice,
            Ok(Err(_)) => None,
            Err(_) => {
                self.handle.abort();
                None
            }
        }
    }
}
