use pocketbook_domain::Displayable;

use crate::cli::args::{parse_amount, ParsedArgs};
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output::{line, section};
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

const DEFAULT_ACCOUNT_ICON: &str = "🏦";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("accounts", "List accounts with their balances", cmd_accounts),
        CommandEntry::new("add-account", "Create an account", cmd_add_account)
            .usage("add-account <name> [icon=🏦] [balance=<opening balance>]")
            .options(&["icon", "balance"]),
    ]
}

fn cmd_accounts(context: &mut ShellContext, _args: &ParsedArgs<'_>) -> CommandResult {
    section("Accounts");
    let accounts = context.store.accounts();
    if accounts.is_empty() {
        io::print_info("No accounts yet. Use `add-account` to create one.");
        return Ok(());
    }
    for account in accounts {
        line(format!(
            "  {} {:<18} {:>14}  ({})",
            account.icon,
            account.name,
            context.format_amount(account.balance),
            account.id
        ));
    }
    line(format!(
        "  Total balance: {}",
        context.format_amount(context.store.total_balance())
    ));
    Ok(())
}

fn cmd_add_account(context: &mut ShellContext, parsed: &ParsedArgs<'_>) -> CommandResult {
    let name = parsed
        .rest(0)
        .ok_or_else(|| CommandError::InvalidArguments("missing account name".into()))?;
    let icon = parsed.option("icon").unwrap_or(DEFAULT_ACCOUNT_ICON);
    let balance = match parsed.option("balance") {
        Some(raw) => parse_amount(raw)?,
        None => 0.0,
    };
    if !balance.is_finite() {
        return Err(CommandError::InvalidArguments("Enter a valid amount".into()));
    }

    let account = context.store.add_account(name, icon, balance);
    io::print_success(format!("Account added: {}", account.display_label()));
    io::print_info(format!(
        "  id {}  opening balance {}",
        account.id,
        context.format_amount(account.opening_balance)
    ));
    Ok(())
}
