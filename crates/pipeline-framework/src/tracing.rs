//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber used by binaries
//! built on this framework.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format without the crate/module prefix
//! (`with_target(false)`); structured fields carry the context instead.
//!
//! ## What Gets Traced
//!
//! - **Caches**: hits, misses and clears, tagged with the cache name
//! - **Pipelines**: inputs and outputs of composed report stages (`debug`)
//! - **Rejections**: inputs a domain crate refuses to process (`warn`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Report summaries only
//! RUST_LOG=info cargo run
//!
//! # Include cache and pipeline detail
//! RUST_LOG=debug cargo run
//!
//! # Only the framework's cache events
//! RUST_LOG=pipeline_framework=debug cargo run
//! ```
//!
//! Call it once per process; a second call panics because a global subscriber is
//! already installed.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
