use crate::cli::io;
use crate::cli::output::{line, section};
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub(crate) fn print_overview(registry: &CommandRegistry) {
    section("Available commands");
    for entry in registry.list() {
        line(format!("  {:<12} {}", entry.name, entry.description));
    }
    io::print_info("Use `help <command>` for details.");
}

pub(crate) fn print_command(entry: &CommandEntry) {
    section(format!("Help: {}", entry.name));
    line(format!("  Description: {}", entry.description));
    line(format!("  Usage: {}", entry.usage));
    if !entry.options.is_empty() {
        line(format!("  Options: {}", entry.options.join(", ")));
    }
}
