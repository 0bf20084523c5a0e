use serde::{Deserialize, Serialize};

use super::{Cents, TotalCents, Transaction, TransactionKind, ValidationError};

/// Aggregate figures over a set of transactions. Plain data: no currency, no
/// formatting. Totals are wider than single amounts, so summing never
/// overflows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_income: TotalCents,
    pub total_expense: TotalCents,
    pub net_balance: TotalCents,
}

/// Compute the summary for a list of transactions.
/// net_balance = sum of income - sum of expenses
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let (total_income, total_expense) = transactions.iter().fold(
        (0, 0),
        |(income, expense): (TotalCents, TotalCents), tx| {
            let amount = TotalCents::from(tx.amount_cents());
            match tx.kind() {
                TransactionKind::Income => (income + amount, expense),
                TransactionKind::Expense => (income, expense + amount),
            }
        },
    );

    Summary {
        total_income,
        total_expense,
        net_balance: total_income - total_expense,
    }
}

/// Append-only, in-memory record of transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and record a transaction.
    ///
    /// Fails with [`ValidationError::InvalidAmount`] when `amount_cents <= 0`,
    /// then with [`ValidationError::InvalidKind`] when `kind` is not a known
    /// label. On error the ledger is left untouched.
    pub fn add_transaction(
        &mut self,
        date: impl Into<String>,
        description: impl Into<String>,
        amount_cents: Cents,
        kind: &str,
    ) -> Result<(), ValidationError> {
        let transaction = Transaction::new(date, description, amount_cents, kind)?;
        tracing::debug!(
            date = transaction.date(),
            amount_cents = transaction.amount_cents(),
            kind = %transaction.kind(),
            "transaction recorded"
        );
        self.transactions.push(transaction);
        Ok(())
    }

    /// Totals over everything recorded so far.
    pub fn summarize(&self) -> Summary {
        let summary = summarize(&self.transactions);
        tracing::debug!(count = self.transactions.len(), ?summary, "ledger summarized");
        summary
    }

    /// Recorded transactions, in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
