//! # Observability & Tracing
//!
//! Both binaries log through `tracing`. The filter comes from `RUST_LOG` and falls back
//! to a per-binary default when it is unset or unparsable.
//!
//! - The server logs to stdout at `info`, so every actor lifecycle event and every
//!   create/update/delete shows up.
//! - The CLI logs to stderr at `warn`, so its stdout stays clean for the response body.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Default: one line per state change
//! catalog-server
//!
//! # Show full payloads
//! RUST_LOG=debug catalog-server
//!
//! # See the HTTP requests the CLI sends
//! RUST_LOG=debug catalog list
//! ```
//!
//! ## What Gets Traced
//!
//! With `RUST_LOG=info` the actor reports each change with structured fields:
//!
//! ```text
//! INFO Actor started entity_type="Product"
//! INFO Created entity_type="Product" id=1 size=1
//! INFO Created entity_type="Product" id=2 size=2
//! INFO Deleted entity_type="Product" id=1 size=1
//! WARN Not found entity_type="Product" id=1
//! ```
//!
//! With `RUST_LOG=debug` the client spans and the request payloads appear as well.
use tracing_subscriber::EnvFilter;

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs the server subscriber.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(filter_or("info"))
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}

/// Installs the CLI subscriber, writing to stderr.
pub fn setup_cli_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(filter_or("warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
