//! Observability.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate; subsystems emit events at the
//!   call sites that matter (broadcasts, poll iterations, outcome branches)
//! - Log level configurable via environment (`RUST_LOG`)
//! - Initialization is left to the embedder; `logging::init` is a convenience

pub mod logging;
