use crate::cli::args::ParsedArgs;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::help;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("help", "Show available commands", cmd_help).usage("help [command]"),
        CommandEntry::new("exit", "Exit the shell", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &ParsedArgs<'_>) -> CommandResult {
    if let Some(name) = args.positional(0) {
        match context.command(&name.to_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &ParsedArgs<'_>) -> CommandResult {
    Err(CommandError::ExitRequested)
}
