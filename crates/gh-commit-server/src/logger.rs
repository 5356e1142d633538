//! Logging setup using env_logger
//!
//! Logs go to stderr. The level defaults to `info` and follows `RUST_LOG`
//! when set (e.g. `RUST_LOG=gh_client=debug,info`).

use env_logger::{Builder, Env};

/// Initialize the global logger
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}
