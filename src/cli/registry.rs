//! Command table for the shell.
//!
//! Each entry declares the `key=value` options it accepts; the registry
//! parses the words once and rejects unknown options before the handler runs.

use strsim::levenshtein;

use crate::cli::args::ParsedArgs;
use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub(crate) type CommandHandler = fn(&mut ShellContext, &ParsedArgs<'_>) -> CommandResult;

#[derive(Clone, Copy)]
pub(crate) struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub options: &'static [&'static str],
    handler: CommandHandler,
}

impl CommandEntry {
    pub(crate) fn new(
        name: &'static str,
        description: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage: name,
            options: &[],
            handler,
        }
    }

    pub(crate) fn usage(mut self, usage: &'static str) -> Self {
        self.usage = usage;
        self
    }

    pub(crate) fn options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }

    pub(crate) fn run(&self, context: &mut ShellContext, args: &[&str]) -> CommandResult {
        let parsed = ParsedArgs::parse(args);
        parsed.ensure_known(self.options)?;
        (self.handler)(context, &parsed)
    }
}

/// Commands in registration order. Re-registering a name replaces the entry in place.
#[derive(Default)]
pub(crate) struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register(&mut self, entry: CommandEntry) {
        match self.entries.iter_mut().find(|existing| existing.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub(crate) fn list(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    /// Registered name nearest to `input`, if within `max_distance` edits.
    pub(crate) fn closest(&self, input: &str, max_distance: usize) -> Option<&'static str> {
        let needle = input.to_lowercase();
        self.names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance)
            .filter(|(distance, _)| *distance <= max_distance)
            .map(|(_, name)| name)
    }
}
