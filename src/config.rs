use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// Retrieval Service (embedding search) configuration
    pub retrieval: RetrievalConfig,
    /// Concept Metadata Service configuration
    pub concepts: ConceptsConfig,
}

/// Configuration for the Retrieval Service that scores candidates against
/// free-text queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Base URL, e.g. "http://127.0.0.1:7700"
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Page size for the offset/limit pagination
    pub page_size: usize,
    /// Cap on candidates fetched per query across all pages
    pub max_candidates: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:7700".to_string(),
            timeout_secs: 15,
            page_size: 100,
            max_candidates: 500,
        }
    }
}

/// Configuration for the Concept Metadata Service that maps concept labels
/// to their semantic opposites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptsConfig {
    /// Base URL, e.g. "http://127.0.0.1:7800"
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ConceptsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:7800".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:9100".to_string(),
            retrieval: RetrievalConfig::default(),
            concepts: ConceptsConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("VIBE_GALLERY_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(url) = std::env::var("RETRIEVAL_BASE_URL") {
            config.retrieval.base_url = url;
        }
        if let Ok(val) = std::env::var("RETRIEVAL_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.retrieval.timeout_secs = v;
            }
        }
        if let Ok(val) = std::env::var("RETRIEVAL_PAGE_SIZE") {
            if let Ok(v) = val.parse() {
                config.retrieval.page_size = v;
            }
        }
        if let Ok(val) = std::env::var("RETRIEVAL_MAX_CANDIDATES") {
            if let Ok(v) = val.parse() {
                config.retrieval.max_candidates = v;
            }
        }
        if let Ok(url) = std::env::var("CONCEPTS_BASE_URL") {
            config.concepts.base_url = url;
        }
        if let Ok(val) = std::env::var("CONCEPTS_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.concepts.timeout_secs = v;
            }
        }

        config
    }
}
