use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

use crate::config::RetrievalConfig;
use crate::models::Candidate;

/// One page of the Retrieval Service's offset/limit pagination.
#[derive(Debug, Deserialize)]
struct SearchPage {
    items: Vec<Candidate>,
    #[serde(default)]
    has_more: bool,
}

/// Fetch scored candidates for a query, following pagination until the
/// service is exhausted or `max_candidates` is reached. Used for the main
/// query and, independently, for each axis's concept/opposite sub-query.
pub async fn search(
    client: &reqwest::Client,
    config: &RetrievalConfig,
    query: &str,
    category: &str,
) -> Result<Vec<Candidate>> {
    let mut items: Vec<Candidate> = Vec::new();
    let mut offset = 0usize;

    loop {
        let page = fetch_page(client, config, query, category, offset, config.page_size).await?;
        let count = page.items.len();
        items.extend(page.items);

        if !page.has_more || count == 0 || items.len() >= config.max_candidates {
            break;
        }
        offset += count;
    }

    items.truncate(config.max_candidates);
    Ok(items)
}

async fn fetch_page(
    client: &reqwest::Client,
    config: &RetrievalConfig,
    query: &str,
    category: &str,
    offset: usize,
    limit: usize,
) -> Result<SearchPage> {
    let url = format!("{}/search", config.base_url);

    let resp = client
        .get(&url)
        .timeout(Duration::from_secs(config.timeout_secs))
        .query(&[
            ("q", query),
            ("category", category),
            ("offset", &offset.to_string()),
            ("limit", &limit.to_string()),
        ])
        .send()
        .await
        .context("Failed to call retrieval service")?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("Retrieval service returned {status}: {body}");
    }

    let page: SearchPage = resp
        .json()
        .await
        .context("Failed to parse retrieval service response")?;
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_with_items() {
        let json = r#"{
            "items": [
                {"id": "img_1", "score": 0.91, "payload": {"url": "a.png"}},
                {"id": "img_2", "score": 0.72}
            ],
            "has_more": true
        }"#;
        let page: SearchPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 2);
        assert!(page.has_more);
        assert_eq!(page.items[0].payload["url"], "a.png");
    }

    #[test]
    fn test_parse_page_has_more_defaults_false() {
        let page: SearchPage = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_more);
    }
}
