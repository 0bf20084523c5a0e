//! Human-readable rendering of a [`Summary`]. The ledger only produces
//! numbers; this is where they become currency text.

use crate::domain::{Summary, TotalCents, format_cents};

/// Format an amount with a currency symbol, sign first: `-$12.34`.
pub fn format_money(cents: TotalCents, currency: &str) -> String {
    let formatted = format_cents(cents);
    match formatted.strip_prefix('-') {
        Some(abs) => format!("-{}{}", currency, abs),
        None => format!("{}{}", currency, formatted),
    }
}

/// Render the three summary figures as a text block, one per line.
pub fn render_summary(summary: &Summary, currency: &str) -> String {
    format!(
        "Financial summary:\n\
         Income:  {}\n\
         Expense: {}\n\
         Balance: {}\n",
        format_money(summary.total_income, currency),
        format_money(summary.total_expense, currency),
        format_money(summary.net_balance, currency),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(37950, "$"), "$379.50");
        assert_eq!(format_money(0, "€"), "€0.00");
        assert_eq!(format_money(-1234, "$"), "-$12.34");
        assert_eq!(format_money(500, "EUR "), "EUR 5.00");
        assert_eq!(
            format_money(TotalCents::from(i64::MAX) + 1, "$"),
            "$92233720368547758.08"
        );
    }

    #[test]
    fn test_render_summary() {
        let summary = Summary {
            total_income: 50000,
            total_expense: 12050,
            net_balance: 37950,
        };

        assert_eq!(
            render_summary(&summary, "$"),
            "Financial summary:\nIncome:  $500.00\nExpense: $120.50\nBalance: $379.50\n"
        );
    }
}
