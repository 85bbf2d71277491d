//! Block explorer links

use crate::config::ExplorerConfig;

/// Builds explorer URLs for transactions, addresses, tokens and blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerUrls {
    base_url: String,
}

impl Default for ExplorerUrls {
    fn default() -> Self {
        Self::from_config(&ExplorerConfig::default())
    }
}

impl ExplorerUrls {
    /// Create links rooted at `base_url`; a trailing slash is dropped
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Create links from explorer settings
    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Transaction page
    pub fn show_transaction(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}/", self.base_url, tx_hash)
    }

    /// Account page
    pub fn show_address(&self, address: &str) -> String {
        format!("{}/address/{}/", self.base_url, address)
    }

    /// Token page
    pub fn show_token(&self, address: &str) -> String {
        format!("{}/token/{}/", self.base_url, address)
    }

    /// Block page
    pub fn show_block(&self, block: u64) -> String {
        format!("{}/block/{}/", self.base_url, block)
    }
}
