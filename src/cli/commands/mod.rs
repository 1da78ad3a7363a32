//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command works on the site
//! snapshot named by the global `--site` flag.

pub mod dispatcher;
pub mod export;
pub mod import;
pub mod options;
pub mod report;
pub mod summary;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
