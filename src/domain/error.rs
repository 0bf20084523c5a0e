use thiserror::Error;

use super::Cents;

/// Why a transaction was refused by the ledger.
///
/// The amount is checked before the kind, so a transaction that is wrong on
/// both counts reports `InvalidAmount`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount must be positive, got {0} cents")]
    InvalidAmount(Cents),

    #[error("transaction kind must be 'income' or 'expense', got '{0}'")]
    InvalidKind(String),
}

impl ValidationError {
    /// Name of the input field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidAmount(_) => "amount",
            ValidationError::InvalidKind(_) => "kind",
        }
    }
}
