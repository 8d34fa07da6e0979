//! framehint CLI library.
//!
//! This module exposes internal types for testing purposes.
//! The main entry point is the `framehint` binary.

pub mod cli;
pub mod input;
pub mod logging;
pub mod output;
pub mod session;

// Re-export commonly used types
pub use cli::Args;
