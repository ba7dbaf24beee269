//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config subsystem produces:
//!     → structured tracing events (load stages, skipped PIN entries,
//!       keys naming unknown tokens)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr), installed by the binary
//! ```
//!
//! # Design Decisions
//! - Secrets (PINs) are never logged
//! - Level configurable via `RUST_LOG`

pub mod logging;
