//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::api::DEFAULT_API_BASE;

fn default_api_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_currency_symbol() -> String {
    "₽".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_visitor_ttl_secs() -> u64 {
    60 * 60
}

#[derive(Clone, Debug, Deserialize)]
/// Settings of the web front-end.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Root of the CRM REST API, e.g. `http://localhost:3000/api`.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    pub templates_dir: String,
    /// Signing key material for flash-message cookies (at least 64 bytes).
    pub secret: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Pages of visitors idle for longer than this are discarded.
    #[serde(default = "default_visitor_ttl_secs")]
    pub visitor_ttl_secs: u64,
}
