//! rawk library interface
//!
//! The startup half of an awk interpreter: command-line processing and
//! seeding of the global namespace before the program is scanned.
//!
//! # Module Organization
//!
//! - [`cli`] - Option dispatch, `-W` abbreviation matching, long-option gate
//! - [`runtime`] - Cells, arrays, the global namespace and its seeding
//! - [`config`] - `config.toml` and environment overrides
//! - [`errors`] - Error types (StartupError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`core`] - Main execution logic

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod diagnostics;
pub mod errors;
pub mod runtime;
pub mod status;
