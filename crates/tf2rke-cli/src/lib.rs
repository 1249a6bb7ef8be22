//! tf2rke library - expose modules for testing
//!
//! This library exposes the command handlers and pipeline used by the binary.

pub mod commands;
pub mod common;
pub mod errors;
pub mod pipeline;

pub use common::GlobalOpts;
pub use tf2rke_logger as logger;
