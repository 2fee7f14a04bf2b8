//! Boundary checks shared by the shell and the ledger store.

use pocketbook_domain::{
    Account, AccountId, Category, Division, Transaction, TransactionDraft, TransactionKind,
};

use crate::error::ValidationError;

pub const MAX_DESCRIPTION_LEN: usize = 100;
pub const DEFAULT_TRANSFER_DESCRIPTION: &str = "Transfer";

pub fn validate_amount(amount: f64) -> Result<(), ValidationError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidAmount)
    }
}

/// Trims the description and enforces the length bound. Empty transfer
/// descriptions fall back to `"Transfer"`.
pub fn normalize_description(
    kind: TransactionKind,
    raw: &str,
) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return match kind {
            TransactionKind::Transfer => Ok(DEFAULT_TRANSFER_DESCRIPTION.to_string()),
            _ => Err(ValidationError::EmptyDescription),
        };
    }
    if trimmed.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooLong {
            max: MAX_DESCRIPTION_LEN,
        });
    }
    Ok(trimmed.to_string())
}

/// Checks the transfer shape: a destination exists iff the kind is transfer,
/// and it differs from the source.
pub fn validate_destination(
    kind: TransactionKind,
    from: &AccountId,
    to: Option<&AccountId>,
) -> Result<(), ValidationError> {
    match (kind, to) {
        (TransactionKind::Transfer, None) => Err(ValidationError::MissingDestination),
        (TransactionKind::Transfer, Some(to)) if to == from => {
            Err(ValidationError::SameAccountTransfer)
        }
        (TransactionKind::Transfer, Some(_)) => Ok(()),
        (_, Some(_)) => Err(ValidationError::UnexpectedDestination),
        (_, None) => Ok(()),
    }
}

fn ensure_known(accounts: &[Account], id: &AccountId) -> Result<(), ValidationError> {
    if accounts.iter().any(|account| &account.id == id) {
        Ok(())
    } else {
        Err(ValidationError::UnknownAccount(id.clone()))
    }
}

/// Validates a draft against the current accounts and returns it normalized.
pub fn validate_draft(
    mut draft: TransactionDraft,
    accounts: &[Account],
) -> Result<TransactionDraft, ValidationError> {
    validate_amount(draft.amount)?;
    draft.description = normalize_description(draft.kind, &draft.description)?;
    validate_destination(draft.kind, &draft.account_id, draft.to_account_id.as_ref())?;
    ensure_known(accounts, &draft.account_id)?;
    if let Some(to) = &draft.to_account_id {
        ensure_known(accounts, to)?;
    }
    if draft.kind == TransactionKind::Transfer {
        draft.category = Category::Other;
        draft.division = Division::Personal;
    }
    Ok(draft)
}

/// Re-checks a stored transaction after a patch has been merged into it.
pub fn validate_transaction(
    mut transaction: Transaction,
    accounts: &[Account],
) -> Result<Transaction, ValidationError> {
    validate_amount(transaction.amount)?;
    transaction.description = normalize_description(transaction.kind, &transaction.description)?;
    validate_destination(
        transaction.kind,
        &transaction.account_id,
        transaction.to_account_id.as_ref(),
    )?;
    ensure_known(accounts, &transaction.account_id)?;
    if let Some(to) = &transaction.to_account_id {
        ensure_known(accounts, to)?;
    }
    if transaction.is_transfer() {
        transaction.category = Category::Other;
        transaction.division = Division::Personal;
    }
    Ok(transaction)
}
