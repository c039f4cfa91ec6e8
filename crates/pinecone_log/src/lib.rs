//! Logging for the Pinecone math crates, re-exporting the `log` macros
//! alongside timing helpers for individual math operations.

#[macro_use]
mod macros;

pub use log::{Level, LevelFilter, debug, error, info, log_enabled, trace, warn};
