// Moving ledgers in and out of the process: CSV for transactions, JSON for
// summaries.

pub mod export;
pub mod import;

pub use export::*;
pub use import::*;

use serde::{Deserialize, Serialize};

/// One transaction as it appears in a CSV file.
/// Header: `date,description,amount,kind`, amount as decimal text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CsvRecord {
    pub date: String,
    pub description: String,
    pub amount: String,
    pub kind: String,
}
