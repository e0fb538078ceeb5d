// --- File: crates/schedulify_common/src/lib.rs ---

// Declare modules within this crate
pub mod http; // HTTP client construction
pub mod logging; // Logging utilities

// Re-export HTTP utilities for easier access
pub use http::client::create_client;

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};
