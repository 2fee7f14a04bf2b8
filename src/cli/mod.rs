pub(crate) mod args;
pub mod commands;
pub(crate) mod core;
pub(crate) mod help;
pub mod io;
pub mod output;
pub(crate) mod registry;
mod shell;
pub mod shell_context;

pub use self::core::{CommandError, CommandResult};
pub use shell::run_cli;
pub use shell_context::{CliMode, ShellContext};
