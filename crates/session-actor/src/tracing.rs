//! # Observability
//!
//! Structured logging for the session runtime and everything built on it.
//!
//! The actor logs each request with an `entity_type` field plus the session id:
//!
//! ```text
//! INFO Session actor started entity_type="OrderSession"
//! INFO Opened entity_type="OrderSession" id=session_1 live=1
//! DEBUG Command entity_type="OrderSession" id=session_1 command=AddItem(MenuItemId(1))
//! ```
//!
//! Log lines go to stderr so they never interleave with a terminal UI on stdout.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p diner
//! ```

use tracing_subscriber::EnvFilter;

/// Installs a compact `fmt` subscriber.
///
/// `RUST_LOG` wins when it is set; otherwise `default_filter` (e.g. `"warn"` or
/// `"diner=debug"`) is used.
pub fn setup_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
