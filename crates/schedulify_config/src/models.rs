// --- File: crates/schedulify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Scheduling Service Config ---
// Connection settings for the external scheduling service that owns
// event persistence and overlap checking.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceConfig {
    pub base_url: String, // e.g. http://localhost:3000, no trailing slash
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    30
}

// --- Frontend UI Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UiConfig {
    /// Seconds before a success/error/info banner clears itself.
    /// Warning banners persist until replaced.
    #[serde(default = "default_banner_auto_clear_secs")]
    pub banner_auto_clear_secs: u64,
}

fn default_banner_auto_clear_secs() -> u64 {
    3
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            banner_auto_clear_secs: default_banner_auto_clear_secs(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Service config is mandatory
    pub service: ServiceConfig,

    #[serde(default)]
    pub ui: UiConfig,
}
