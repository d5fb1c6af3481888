use serde::{Deserialize, Serialize};

/// Gateway configuration - owned by the HTTP shell
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub bind_addr: String,
    /// Environment name reported by the health endpoint.
    pub environment: String,
    #[serde(default)]
    pub enable_docs: bool,
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
    #[serde(default)]
    pub rate_limit: RateLimitSettings,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RateLimitSettings {
    /// Requests allowed per client within one window.
    pub max_requests: u32,
    /// Window length in seconds.
    pub window_secs: u64,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window_secs: 15 * 60,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            environment: "development".to_string(),
            enable_docs: false,
            cors_enabled: true,
            body_limit_bytes: default_body_limit(),
            rate_limit: RateLimitSettings::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_body_limit() -> usize {
    10 * 1024 * 1024
}
