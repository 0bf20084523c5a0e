use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::domain::{Ledger, Summary, format_cents};
use crate::io::CsvRecord;

/// Summary plus the context it was computed in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySnapshot {
    pub generated_at: DateTime<Utc>,
    pub transaction_count: usize,
    pub summary: Summary,
}

/// Exporter for converting ledger data to various formats
pub struct Exporter<'a> {
    ledger: &'a Ledger,
}

impl<'a> Exporter<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Export transactions to CSV, kinds in canonical form.
    /// The output can be fed back to [`crate::io::Importer::import_csv`].
    pub fn export_transactions_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        let mut count = 0;
        for transaction in self.ledger {
            csv_writer.serialize(CsvRecord {
                date: transaction.date().to_string(),
                description: transaction.description().to_string(),
                amount: format_cents(transaction.amount_cents()),
                kind: transaction.kind().to_string(),
            })?;
            count += 1;
        }

        // An empty ledger still gets a header so the file re-imports cleanly
        if count == 0 {
            csv_writer.write_record(["date", "description", "amount", "kind"])?;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the ledger summary as pretty-printed JSON.
    pub fn export_summary_json<W: Write>(&self, mut writer: W) -> Result<SummarySnapshot> {
        let snapshot = self.snapshot();
        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writeln!(writer)?;
        Ok(snapshot)
    }

    pub fn snapshot(&self) -> SummarySnapshot {
        SummarySnapshot {
            generated_at: Utc::now(),
            transaction_count: self.ledger.len(),
            summary: self.ledger.summarize(),
        }
    }
}
