use dialoguer::theme::ColorfulTheme;
use pocketbook_config::{Config, ConfigManager};
use pocketbook_core::{
    currency_formatter_for, sample_data, CurrencyFormatter, DateFormatter, EditWindow,
    LedgerStore, ShortDate,
};
use pocketbook_domain::{AccountId, Transaction, TransactionId};

use crate::cli::commands;
use crate::cli::core::CommandError;
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::errors::CliError;

/// Environment variable that switches the shell to reading commands from stdin.
pub const SCRIPT_ENV: &str = "POCKETBOOK_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// State shared by every shell command: the ledger, preferences and registry.
pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) store: LedgerStore,
    pub(crate) config: Config,
    pub(crate) theme: ColorfulTheme,
    pub(crate) last_command: Option<String>,
    pub(crate) running: bool,
    amounts: Box<dyn CurrencyFormatter>,
    dates: ShortDate,
}

impl ShellContext {
    /// Loads preferences from disk and prepares the ledger they describe.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::from_env()?.load()?;
        let store = LedgerStore::new();
        Self::with_parts(mode, config, store)
    }

    /// Builds a context around an existing store, seeding it when the
    /// preferences ask for sample data.
    pub fn with_parts(
        mode: CliMode,
        config: Config,
        store: LedgerStore,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        output::set_color_enabled(config.ui_color_enabled);

        let mut store = store.with_edit_window(EditWindow::from_hours(config.edit_window_hours));
        if config.load_sample_data {
            sample_data::seed(&mut store)?;
        }

        let amounts = currency_formatter_for(&config.locale);
        Ok(ShellContext {
            mode,
            registry,
            store,
            config,
            theme: ColorfulTheme::default(),
            last_command: None,
            running: true,
            amounts,
            dates: ShortDate,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    /// The most recent non-empty input line.
    pub fn last_command(&self) -> Option<&str> {
        self.last_command.as_deref()
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub(crate) fn prompt(&self) -> String {
        format!(
            "pocketbook [{}]> ",
            self.format_amount(self.store.total_balance())
        )
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn format_amount(&self, amount: f64) -> String {
        self.amounts
            .format_amount(amount, &self.config.currency_symbol)
    }

    pub(crate) fn format_date(&self, transaction: &Transaction) -> String {
        self.dates.format_timestamp(transaction.date)
    }

    /// Matches an account by id or case-insensitive name. Unmatched input is
    /// passed through so the ledger reports it as an unknown account.
    pub(crate) fn resolve_account(&self, input: &str) -> AccountId {
        let accounts = self.store.accounts();
        accounts
            .iter()
            .find(|account| account.id.as_str() == input)
            .or_else(|| {
                accounts
                    .iter()
                    .find(|account| account.name.eq_ignore_ascii_case(input))
            })
            .map(|account| account.id.clone())
            .unwrap_or_else(|| AccountId::from(input))
    }

    /// First account in the ledger, used when a command omits `account=`.
    pub(crate) fn default_account(&self) -> Result<AccountId, CommandError> {
        self.store
            .accounts()
            .first()
            .map(|account| account.id.clone())
            .ok_or_else(|| {
                CommandError::Message("No accounts yet. Use `add-account` first.".into())
            })
    }

    /// Resolves `last`, a full id, or an unambiguous id prefix.
    pub(crate) fn resolve_transaction(&self, input: &str) -> Result<TransactionId, CommandError> {
        let transactions = self.store.transactions();
        if input.eq_ignore_ascii_case("last") {
            return transactions
                .last()
                .map(|txn| txn.id.clone())
                .ok_or_else(|| CommandError::Message("No transactions recorded.".into()));
        }
        if let Some(txn) = transactions.iter().find(|txn| txn.id.as_str() == input) {
            return Ok(txn.id.clone());
        }
        let mut matches = transactions
            .iter()
            .filter(|txn| txn.id.as_str().starts_with(input));
        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(txn.id.clone()),
            (Some(_), Some(_)) => Err(CommandError::InvalidArguments(format!(
                "transaction id `{input}` is ambiguous"
            ))),
            (None, _) => Ok(TransactionId::from(input)),
        }
    }

    pub(crate) fn edit_window_hours(&self) -> i64 {
        self.store.edit_window().hours()
    }
}

/// First eight characters of an identifier, enough to address it in the shell.
pub(crate) fn short_id(id: &TransactionId) -> String {
    id.as_str().chars().take(8).collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pocketbook_core::ManualClock;

    /// Script-mode context over the sample ledger, with the clock pinned to
    /// 2026-02-05 12:00 UTC.
    pub(crate) fn script_context() -> ShellContext {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 2, 5, 12, 0, 0).unwrap());
        let config = Config {
            ui_color_enabled: false,
            ..Config::default()
        };
        ShellContext::with_parts(CliMode::Script, config, LedgerStore::with_clock(clock)).unwrap()
    }

    #[test]
    fn accounts_resolve_by_id_or_name() {
        let context = script_context();
        assert_eq!(context.resolve_account("bank").as_str(), "bank");
        assert_eq!(context.resolve_account("digital wallet").as_str(), "wallet");
        assert_eq!(context.resolve_account("savings").as_str(), "savings");
    }

    #[test]
    fn transactions_resolve_by_keyword_and_prefix() {
        let context = script_context();
        assert_eq!(context.resolve_transaction("last").unwrap().as_str(), "8");
        assert_eq!(context.resolve_transaction("3").unwrap().as_str(), "3");
        assert_eq!(context.resolve_transaction("42").unwrap().as_str(), "42");
    }

    #[test]
    fn prompt_shows_total_balance() {
        let context = script_context();
        assert_eq!(context.prompt(), "pocketbook [₹73,200]> ");
    }

    #[test]
    fn locale_drives_amount_grouping() {
        let config = Config {
            currency_symbol: "$".into(),
            locale: "en-US".into(),
            ui_color_enabled: false,
            load_sample_data: false,
            ..Config::default()
        };
        let context = ShellContext::with_parts(CliMode::Script, config, LedgerStore::new()).unwrap();
        assert_eq!(context.format_amount(1234567.0), "$1,234,567");
    }
}
