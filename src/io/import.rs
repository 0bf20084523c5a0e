use anyhow::Result;
use std::io::Read;

use crate::domain::{Ledger, parse_cents};
use crate::io::CsvRecord;

/// Result of an import operation
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    pub imported: usize,
    pub errors: Vec<ImportError>,
}

impl ImportResult {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A row that could not be recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportError {
    /// 1-based line in a CSV file (header is line 1), or entry number for
    /// inline entries
    pub line: usize,
    pub field: Option<String>,
    pub error: String,
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.field {
            Some(field) => write!(f, "line {}: {}: {}", self.line, field, self.error),
            None => write!(f, "line {}: {}", self.line, self.error),
        }
    }
}

/// Options for import operations
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Check every row but leave the target ledger untouched
    pub validate_only: bool,
}

/// Importer for loading transactions into a ledger
pub struct Importer<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> Importer<'a> {
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Import transactions from CSV with a `date,description,amount,kind`
    /// header. Bad rows are collected in the result, they never stop the
    /// import.
    pub fn import_csv<R: Read>(
        &mut self,
        reader: R,
        options: ImportOptions,
    ) -> Result<ImportResult> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut scratch = Ledger::new();
        let target = if options.validate_only {
            &mut scratch
        } else {
            &mut *self.ledger
        };

        let mut result = ImportResult::default();
        let mut last_line = 1;

        for row in csv_reader.records() {
            // Lines come from the reader, which skips blank lines and lets
            // quoted fields span several lines
            let (line, parsed) = match row {
                Ok(record) => {
                    let line = record_line(record.position()).unwrap_or(last_line + 1);
                    (line, record.deserialize::<CsvRecord>(Some(&headers)))
                }
                Err(e) => (record_line(e.position()).unwrap_or(last_line + 1), Err(e)),
            };
            last_line = line;

            match parsed {
                Ok(record) => record_row(target, record, line, &mut result),
                Err(e) => reject(
                    &mut result,
                    ImportError {
                        line,
                        field: None,
                        error: format!("CSV parse error: {}", e),
                    },
                ),
            }
        }

        Ok(result)
    }

    /// Import inline entries of the form `date,description,amount,kind`.
    /// An empty date is replaced by `default_date`. Entries are numbered from 1.
    pub fn import_entries<I, S>(
        &mut self,
        entries: I,
        default_date: &str,
        options: ImportOptions,
    ) -> ImportResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scratch = Ledger::new();
        let target = if options.validate_only {
            &mut scratch
        } else {
            &mut *self.ledger
        };

        let mut result = ImportResult::default();

        for (index, entry) in entries.into_iter().enumerate() {
            let line = index + 1;
            match parse_entry(entry.as_ref()) {
                Ok(mut record) => {
                    if record.date.is_empty() {
                        record.date = default_date.to_string();
                    }
                    record_row(target, record, line, &mut result);
                }
                Err(error) => reject(
                    &mut result,
                    ImportError {
                        line,
                        field: None,
                        error,
                    },
                ),
            }
        }

        result
    }
}

fn record_line(position: Option<&csv::Position>) -> Option<usize> {
    position.map(|p| p.line() as usize)
}

/// Split one entry with CSV quoting rules, so descriptions may contain commas
/// when quoted. Exactly four fields are required, as in a CSV file.
fn parse_entry(entry: &str) -> std::result::Result<CsvRecord, String> {
    let expected = |detail: String| {
        format!(
            "expected 'date,description,amount,kind', got '{}': {}",
            entry, detail
        )
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(entry.as_bytes());

    let record = match reader.records().next() {
        Some(Ok(record)) => record,
        Some(Err(e)) => return Err(expected(e.to_string())),
        None => return Err("empty entry".to_string()),
    };
    if record.len() != 4 {
        return Err(expected(format!("found {} field(s)", record.len())));
    }

    record
        .deserialize::<CsvRecord>(None)
        .map_err(|e| expected(e.to_string()))
}

fn record_row(ledger: &mut Ledger, record: CsvRecord, line: usize, result: &mut ImportResult) {
    let amount_cents = match parse_cents(&record.amount) {
        Ok(a) => a,
        Err(e) => {
            reject(
                result,
                ImportError {
                    line,
                    field: Some("amount".to_string()),
                    error: format!("Invalid amount: {}", e),
                },
            );
            return;
        }
    };

    match ledger.add_transaction(record.date, record.description, amount_cents, &record.kind) {
        Ok(()) => result.imported += 1,
        Err(e) => reject(
            result,
            ImportError {
                line,
                field: Some(e.field().to_string()),
                error: e.to_string(),
            },
        ),
    }
}

fn reject(result: &mut ImportResult, error: ImportError) {
    tracing::debug!(line = error.line, field = ?error.field, "row rejected: {}", error.error);
    result.errors.push(error);
}
