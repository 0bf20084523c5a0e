// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use clap::Parser;
use daybook::Ledger;
use daybook::cli::Cli;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

/// The two-transaction example: 500.00 income, 120.50 expense.
pub const SAMPLE_CSV: &str = "\
date,description,amount,kind
2025-01-28,Venta de servicios,500.00,ingreso
2025-01-29,Pago de luz,120.50,egreso
";

/// Ledger holding the sample transactions
pub fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger
        .add_transaction("2025-01-28", "Venta de servicios", 50000, "ingreso")
        .unwrap();
    ledger
        .add_transaction("2025-01-29", "Pago de luz", 12050, "egreso")
        .unwrap();
    ledger
}

/// Helper to write CSV content into a temporary directory
pub fn write_csv(contents: &str) -> Result<(PathBuf, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("transactions.csv");
    std::fs::write(&path, contents)?;
    Ok((path, temp_dir))
}

/// Run the CLI with the given arguments and capture stdout
pub fn run_cli(args: &[&str]) -> Result<String> {
    run_cli_with_stdin(args, "")
}

/// Run the CLI feeding `stdin` as standard input, capture stdout
pub fn run_cli_with_stdin(args: &[&str], stdin: &str) -> Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("daybook").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    cli.execute(stdin.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out)?)
}

/// In-memory sink for log output
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run the CLI with an INFO-level subscriber scoped to this call.
/// Returns the command result and everything that was logged.
pub fn run_cli_with_logs(args: &[&str]) -> (Result<String>, String) {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || run_cli(args));
    (result, logs.contents())
}
