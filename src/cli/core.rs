//! Dispatch, error reporting, and command errors for the shell.

use std::io;

use pocketbook_config::ConfigError;
use pocketbook_core::{CoreError, ValidationError};

use crate::cli::io as cli_io;
use crate::cli::shell::parse_command_line;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::errors::CliError;

const SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Core(CoreError::Validation(err))
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl ShellContext {
    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(entry) = self.registry.get(command).copied() {
            match entry.run(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Tokenizes and runs one input line.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(err);
                return Ok(LoopControl::Continue);
            }
        };

        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };

        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.last_command = Some(line.trim().to_string());

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        if let Some(name) = self.registry.closest(input, SUGGESTION_DISTANCE) {
            cli_io::print_info(format!("Suggestion: `{}`?", name));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true).map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Io(err) => Err(err.into()),
            other => {
                cli_io::print_error(other);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn process_script(
    context: &mut ShellContext,
    lines: &[&str],
) -> Result<(), CliError> {
    for line in lines {
        match context.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::shell_context::tests::script_context;
    use pocketbook_domain::{AccountId, TransactionKind};

    #[test]
    fn income_command_updates_balance() {
        let mut context = script_context();
        process_script(&mut context, &["income 1500 Bonus account=cash"]).unwrap();
        let cash = context.store.account(&AccountId::from("cash")).unwrap();
        assert_eq!(cash.balance, 5000.0 - 2500.0 - 3000.0 + 1500.0);
        let last = context.store.transactions().last().unwrap();
        assert_eq!(last.kind, TransactionKind::Income);
        assert_eq!(last.description, "Bonus");
    }

    #[test]
    fn invalid_input_leaves_store_untouched() {
        let mut context = script_context();
        let before = context.store.transactions().len();
        process_script(
            &mut context,
            &[
                "expense -5 Refund",
                "expense 10",
                "transfer cash cash 100",
                "income ten Salary",
            ],
        )
        .unwrap();
        assert_eq!(context.store.transactions().len(), before);
    }

    #[test]
    fn exit_stops_processing() {
        let mut context = script_context();
        let before = context.store.transactions().len();
        process_script(&mut context, &["exit", "income 10 Late"]).unwrap();
        assert!(!context.running);
        assert_eq!(context.store.transactions().len(), before);
    }

    #[test]
    fn unknown_commands_are_not_errors() {
        let mut context = script_context();
        assert_eq!(
            context.process_line("acounts").unwrap(),
            LoopControl::Continue
        );
        assert_eq!(context.last_command.as_deref(), Some("acounts"));
    }
}
