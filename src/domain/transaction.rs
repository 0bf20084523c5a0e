use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Cents, ValidationError};

/// Whether a transaction brings money in or takes it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Canonical lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ValidationError;

    /// Case-insensitive. The Spanish labels `ingreso` and `egreso` are
    /// accepted alongside `income` and `expense`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" | "ingreso" => Ok(TransactionKind::Income),
            "expense" | "egreso" => Ok(TransactionKind::Expense),
            _ => Err(ValidationError::InvalidKind(s.to_string())),
        }
    }
}

/// A single recorded monetary event.
/// Only constructed through [`Transaction::new`], so a value of this type is
/// always valid: positive amount, known kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Caller supplied date token, stored as given
    date: String,
    description: String,
    /// Amount in cents (always positive)
    amount_cents: Cents,
    kind: TransactionKind,
}

impl Transaction {
    /// Validate and build a transaction. The amount is checked before the kind.
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        amount_cents: Cents,
        kind: &str,
    ) -> Result<Self, ValidationError> {
        if amount_cents <= 0 {
            return Err(ValidationError::InvalidAmount(amount_cents));
        }
        let kind = kind.parse::<TransactionKind>()?;

        Ok(Self {
            date: date.into(),
            description: description.into(),
            amount_cents,
            kind,
        })
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount_cents(&self) -> Cents {
        self.amount_cents
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind_case_insensitive() {
        assert_eq!("income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!("Income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!("INGRESO".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!("expense".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
        assert_eq!("EgReSo".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
    }

    #[test]
    fn test_parse_kind_rejects_unknown_labels() {
        assert_eq!(
            "donation".parse::<TransactionKind>(),
            Err(ValidationError::InvalidKind("donation".to_string()))
        );
        // No trimming: only lowercasing is applied
        assert!(" income".parse::<TransactionKind>().is_err());
        assert!("".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_kind_canonical_form() {
        assert_eq!(TransactionKind::Income.to_string(), "income");
        assert_eq!(TransactionKind::Expense.as_str(), "expense");
        assert_eq!(
            serde_json::to_string(&TransactionKind::Expense).unwrap(),
            "\"expense\""
        );
    }

    #[test]
    fn test_create_transaction() {
        let tx = Transaction::new("2025-01-29", "Pago de luz", 12050, "EGRESO").unwrap();

        assert_eq!(tx.date(), "2025-01-29");
        assert_eq!(tx.description(), "Pago de luz");
        assert_eq!(tx.amount_cents(), 12050);
        assert_eq!(tx.kind(), TransactionKind::Expense);
        assert!(!tx.is_income());
    }

    #[test]
    fn test_date_is_not_interpreted() {
        let tx = Transaction::new("not a date", "", 1, "income").unwrap();
        assert_eq!(tx.date(), "not a date");
    }

    #[test]
    fn test_transaction_requires_positive_amount() {
        assert_eq!(
            Transaction::new("d", "desc", 0, "income"),
            Err(ValidationError::InvalidAmount(0))
        );
        assert_eq!(
            Transaction::new("d", "desc", -1000, "ingreso"),
            Err(ValidationError::InvalidAmount(-1000))
        );
    }

    #[test]
    fn test_amount_checked_before_kind() {
        assert_eq!(
            Transaction::new("d", "desc", -5, "donation"),
            Err(ValidationError::InvalidAmount(-5))
        );
    }

    #[test]
    fn test_serialize_transaction() {
        let tx = Transaction::new("2025-01-28", "Venta", 50000, "Ingreso").unwrap();
        let json = serde_json::to_value(&tx).unwrap();

        assert_eq!(json["kind"], "income");
        assert_eq!(json["amount_cents"], 50000);
        assert_eq!(json["date"], "2025-01-28");
    }
}
