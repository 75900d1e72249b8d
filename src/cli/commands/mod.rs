//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and shares project/config lookup.

pub mod build;
pub mod clean;
pub mod completions;
pub mod dispatcher;
pub mod extract;
pub mod gc;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
