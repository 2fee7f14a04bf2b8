use chrono::{DateTime, Utc};
use pocketbook_core::{EditOutcome, TransactionFilter};
use pocketbook_domain::{
    Category, Division, Displayable, Transaction, TransactionDraft, TransactionId,
    TransactionKind, TransactionPatch,
};

use crate::cli::args::{parse_amount, parse_date, parse_day_start, parse_enum, ParsedArgs};
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output::{line, section};
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::{short_id, CliMode, ShellContext};

const ENTRY_OPTIONS: &[&str] = &["account", "category", "division", "date"];
const EDIT_OPTIONS: &[&str] = &[
    "type",
    "amount",
    "description",
    "category",
    "division",
    "account",
    "to",
    "date",
];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("income", "Record money received", cmd_income)
            .usage("income <amount> <description> [account=<id|name>] [category=salary] [division=personal|office] [date=YYYY-MM-DD]")
            .options(ENTRY_OPTIONS),
        CommandEntry::new("expense", "Record money spent", cmd_expense)
            .usage("expense <amount> <description> [account=<id|name>] [category=food] [division=personal|office] [date=YYYY-MM-DD]")
            .options(ENTRY_OPTIONS),
        CommandEntry::new("transfer", "Move money between two accounts", cmd_transfer)
            .usage("transfer <from> <to> <amount> [description] [date=YYYY-MM-DD]")
            .options(&["date"]),
        CommandEntry::new("list", "List transactions, newest first", cmd_list)
            .usage("list [from=YYYY-MM-DD] [to=YYYY-MM-DD] [category=<name>] [division=personal|office]")
            .options(&["from", "to", "category", "division"]),
        CommandEntry::new(
            "edit",
            "Change a transaction inside its editing window",
            cmd_edit,
        )
        .usage("edit <id|last> [type=income|expense|transfer] [amount=] [description=\"...\"] [category=] [division=] [account=] [to=] [date=YYYY-MM-DD]")
        .options(EDIT_OPTIONS),
        CommandEntry::new(
            "delete",
            "Delete a transaction inside its editing window",
            cmd_delete,
        )
        .usage("delete <id|last>"),
    ]
}

fn cmd_income(context: &mut ShellContext, args: &ParsedArgs<'_>) -> CommandResult {
    record_entry(context, args, TransactionKind::Income)
}

fn cmd_expense(context: &mut ShellContext, args: &ParsedArgs<'_>) -> CommandResult {
    record_entry(context, args, TransactionKind::Expense)
}

fn record_entry(
    context: &mut ShellContext,
    parsed: &ParsedArgs<'_>,
    kind: TransactionKind,
) -> CommandResult {
    let amount = parse_amount(parsed.require(0, "amount")?)?;
    let description = parsed.rest(1).unwrap_or_default();
    let account = match parsed.option("account") {
        Some(raw) => context.resolve_account(raw),
        None => context.default_account()?,
    };
    let category = parsed
        .option("category")
        .map(parse_enum::<Category>)
        .transpose()?
        .unwrap_or_default();
    let division = parsed
        .option("division")
        .map(parse_enum::<Division>)
        .transpose()?
        .unwrap_or(context.config.default_division);
    let date = entry_date(context, parsed)?;

    let draft = TransactionDraft::new(kind, account, amount, description, date)
        .with_category(category)
        .with_division(division);
    let transaction = context.store.add_transaction(draft)?;

    io::print_success(match kind {
        TransactionKind::Income => "Income added!",
        _ => "Expense added!",
    });
    line(describe(context, &transaction));
    Ok(())
}

fn cmd_transfer(context: &mut ShellContext, parsed: &ParsedArgs<'_>) -> CommandResult {
    let from = context.resolve_account(parsed.require(0, "source account")?);
    let to = context.resolve_account(parsed.require(1, "destination account")?);
    let amount = parse_amount(parsed.require(2, "amount")?)?;
    let description = parsed.rest(3).unwrap_or_default();
    let date = entry_date(context, parsed)?;

    let transaction = context
        .store
        .transfer_between_accounts(&from, &to, amount, &description, date)?;

    io::print_success("Transfer completed!");
    line(describe(context, &transaction));
    Ok(())
}

fn cmd_list(context: &mut ShellContext, parsed: &ParsedArgs<'_>) -> CommandResult {
    let mut filter = TransactionFilter::new();
    if let Some(raw) = parsed.option("from") {
        filter = filter.from_date(parse_date(raw)?);
    }
    if let Some(raw) = parsed.option("to") {
        filter = filter.to_date(parse_date(raw)?);
    }
    if let Some(raw) = parsed.option("category") {
        filter = filter.category(parse_enum(raw)?);
    }
    if let Some(raw) = parsed.option("division") {
        filter = filter.division(parse_enum(raw)?);
    }

    section("Transactions");
    let matched = filter.apply(context.store.transactions());
    if matched.is_empty() {
        io::print_info("No transactions match.");
        return Ok(());
    }
    for transaction in &matched {
        line(describe(context, transaction));
    }
    io::print_info(format!("{} transaction(s).", matched.len()));
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, parsed: &ParsedArgs<'_>) -> CommandResult {
    let id = context.resolve_transaction(parsed.require(0, "transaction id")?)?;
    reject_extra_words(parsed)?;
    let patch = build_patch(context, parsed)?;
    if patch.is_empty() {
        return Err(CommandError::InvalidArguments(
            "nothing to change; pass at least one field, e.g. amount=250".into(),
        ));
    }

    match context.store.update_transaction(&id, patch)? {
        EditOutcome::Applied => {
            io::print_success("Transaction updated");
            if let Some(transaction) = context.store.transaction(&id) {
                line(describe(context, transaction));
            }
            Ok(())
        }
        outcome => Err(declined(context, "edit", &id, outcome)),
    }
}

fn build_patch(
    context: &ShellContext,
    parsed: &ParsedArgs<'_>,
) -> Result<TransactionPatch, CommandError> {
    let mut patch = TransactionPatch::default();
    if let Some(raw) = parsed.option("type") {
        patch = patch.kind(parse_enum(raw)?);
    }
    if let Some(raw) = parsed.option("amount") {
        patch = patch.amount(parse_amount(raw)?);
    }
    if let Some(raw) = parsed.option("description") {
        patch = patch.description(raw);
    }
    if let Some(raw) = parsed.option("category") {
        patch = patch.category(parse_enum(raw)?);
    }
    if let Some(raw) = parsed.option("division") {
        patch = patch.division(parse_enum(raw)?);
    }
    if let Some(raw) = parsed.option("account") {
        patch = patch.account(context.resolve_account(raw));
    }
    if let Some(raw) = parsed.option("to") {
        patch = patch.to_account(context.resolve_account(raw));
    }
    if let Some(raw) = parsed.option("date") {
        patch = patch.date(parse_day_start(raw)?);
    }
    Ok(patch)
}

fn cmd_delete(context: &mut ShellContext, parsed: &ParsedArgs<'_>) -> CommandResult {
    let id = context.resolve_transaction(parsed.require(0, "transaction id")?)?;
    reject_extra_words(parsed)?;

    if context.mode() == CliMode::Interactive && context.store.can_edit(&id) {
        let prompt = match context.store.transaction(&id) {
            Some(transaction) => format!("Delete {}?", transaction.display_label()),
            None => format!("Delete transaction `{id}`?"),
        };
        if !io::confirm_action(&context.theme, &prompt, false)? {
            io::print_info("Delete cancelled.");
            return Ok(());
        }
    }

    match context.store.delete_transaction(&id) {
        EditOutcome::Applied => {
            io::print_success("Transaction deleted");
            Ok(())
        }
        outcome => Err(declined(context, "delete", &id, outcome)),
    }
}

/// Only the id is positional; values with spaces must be quoted.
fn reject_extra_words(parsed: &ParsedArgs<'_>) -> Result<(), CommandError> {
    match parsed.rest(1) {
        Some(extra) => Err(CommandError::InvalidArguments(format!(
            "unexpected `{extra}` after the transaction id; quote values with spaces, e.g. description=\"Dinner out\""
        ))),
        None => Ok(()),
    }
}

fn declined(
    context: &ShellContext,
    action: &str,
    id: &TransactionId,
    outcome: EditOutcome,
) -> CommandError {
    match outcome {
        EditOutcome::WindowExpired => CommandError::Message(format!(
            "Cannot {action}: editing window has expired ({} hours)",
            context.edit_window_hours()
        )),
        _ => CommandError::Message(format!("Transaction `{id}` not found")),
    }
}

fn entry_date(
    context: &ShellContext,
    parsed: &ParsedArgs<'_>,
) -> Result<DateTime<Utc>, CommandError> {
    match parsed.option("date") {
        Some(raw) => parse_day_start(raw),
        None => Ok(context.store.now()),
    }
}

/// One listing row: id, date, glyph, description, signed amount, accounts.
fn describe(context: &ShellContext, transaction: &Transaction) -> String {
    let accounts = match &transaction.to_account_id {
        Some(to) => format!(
            "{} → {}",
            context.store.account_label(&transaction.account_id),
            context.store.account_label(to)
        ),
        None => context.store.account_label(&transaction.account_id),
    };
    format!(
        "  {:<8} {:<13} {} {:<28} {:>14}  {} {}",
        short_id(&transaction.id),
        context.format_date(transaction),
        transaction.icon(),
        transaction.description,
        format!(
            "{}{}",
            transaction.sign_prefix(),
            context.format_amount(transaction.amount)
        ),
        transaction.division.icon(),
        accounts
    )
}
