use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

use crate::config::ConceptsConfig;

#[derive(Debug, Deserialize)]
struct OppositesResponse {
    #[serde(default)]
    opposites: Vec<String>,
}

/// Look up the semantic opposite for a concept label.
///
/// The service may offer several opposites; only the first non-empty entry
/// is used. `None` means the concept has no known opposite and the axis
/// stays single-pole.
pub async fn lookup_opposite(
    client: &reqwest::Client,
    config: &ConceptsConfig,
    concept: &str,
) -> Result<Option<String>> {
    let url = format!("{}/opposites", config.base_url);

    let resp = client
        .get(&url)
        .timeout(Duration::from_secs(config.timeout_secs))
        .query(&[("concept", concept)])
        .send()
        .await
        .context("Failed to call concept metadata service")?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("Concept metadata service returned {status}: {body}");
    }

    let body: OppositesResponse = resp
        .json()
        .await
        .context("Failed to parse opposites response")?;

    Ok(first_usable(body.opposites))
}

fn first_usable(opposites: Vec<String>) -> Option<String> {
    opposites
        .into_iter()
        .map(|s| s.trim().to_string())
        .find(|s| !s.is_empty())
}
