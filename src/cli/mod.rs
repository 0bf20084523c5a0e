pub mod report;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{Read, Write, stdin, stdout};

use crate::domain::Ledger;
use crate::io::{Exporter, ImportOptions, Importer};
use crate::logging::init_tracing;

/// Daybook - income and expense totals
#[derive(Parser)]
#[command(name = "daybook")]
#[command(about = "Record income and expense transactions and summarize them")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print total income, total expense and net balance
    Summary {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = SummaryFormat::Text)]
        format: SummaryFormat,

        /// Currency symbol used in text output
        #[arg(short, long, env = "DAYBOOK_CURRENCY", default_value = "$")]
        currency: String,

        /// Warn about invalid transactions instead of failing
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Validate transactions without producing output
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Write normalized transactions (csv) or the summary (json)
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },
}

/// Where transactions come from. With neither option, CSV is read from stdin.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// CSV file with a `date,description,amount,kind` header ("-" for stdin)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Inline transaction "date,description,amount,kind"; an empty date means today
    #[arg(short, long = "entry")]
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Ledger built from a [`SourceArgs`], plus a description of every rejected row.
struct LoadedLedger {
    ledger: Ledger,
    problems: Vec<String>,
}

impl LoadedLedger {
    fn problem_report(&self) -> String {
        format!(
            "{} invalid transaction(s):\n  {}",
            self.problems.len(),
            self.problems.join("\n  ")
        )
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);
        let mut out = stdout().lock();
        self.execute(stdin().lock(), &mut out)
    }

    /// Run the command. CSV for `--input -` is read from `input`, regular
    /// output goes to `out`.
    pub fn execute<R: Read, W: Write>(self, input: R, out: &mut W) -> Result<()> {
        match self.command {
            Commands::Summary {
                source,
                format,
                currency,
                skip_invalid,
            } => {
                let loaded = load_ledger(&source, input)?;
                if !loaded.problems.is_empty() {
                    if !skip_invalid {
                        anyhow::bail!(loaded.problem_report());
                    }
                    for problem in &loaded.problems {
                        tracing::warn!("skipped {}", problem);
                    }
                }

                match format {
                    SummaryFormat::Text => {
                        let summary = loaded.ledger.summarize();
                        write!(out, "{}", report::render_summary(&summary, &currency))?;
                    }
                    SummaryFormat::Json => {
                        Exporter::new(&loaded.ledger).export_summary_json(&mut *out)?;
                    }
                }
            }

            Commands::Check { source } => {
                let loaded = load_ledger(&source, input)?;
                if !loaded.problems.is_empty() {
                    anyhow::bail!(loaded.problem_report());
                }
                writeln!(out, "OK: {} valid transaction(s)", loaded.ledger.len())?;
            }

            Commands::Export {
                source,
                output,
                format,
            } => {
                let loaded = load_ledger(&source, input)?;
                if !loaded.problems.is_empty() {
                    anyhow::bail!(loaded.problem_report());
                }
                run_export_command(&loaded.ledger, output.as_deref(), format, out)?;
            }
        }

        Ok(())
    }
}

fn load_ledger<R: Read>(source: &SourceArgs, stdin_reader: R) -> Result<LoadedLedger> {
    let mut ledger = Ledger::new();
    let mut problems = Vec::new();
    let mut importer = Importer::new(&mut ledger);

    let csv_path = match source.input.as_deref() {
        Some(path) => Some(path),
        None if source.entries.is_empty() => Some("-"),
        None => None,
    };

    if let Some(path) = csv_path {
        let label = if path == "-" { "stdin" } else { path };
        let result = if path == "-" {
            importer.import_csv(stdin_reader, ImportOptions::default())
        } else {
            let file =
                File::open(path).with_context(|| format!("Failed to open input file: {}", path))?;
            importer.import_csv(file, ImportOptions::default())
        }
        .with_context(|| format!("Failed to read transactions from {}", label))?;
        tracing::debug!(source = label, imported = result.imported, "csv loaded");
        problems.extend(result.errors.iter().map(|e| format!("{}: {}", label, e)));
    }

    if !source.entries.is_empty() {
        let today = Local::now().format("%Y-%m-%d").to_string();
        let result = importer.import_entries(&source.entries, &today, ImportOptions::default());
        problems.extend(result.errors.iter().map(|e| {
            format!("--entry {}", e.to_string().trim_start_matches("line "))
        }));
    }

    Ok(LoadedLedger { ledger, problems })
}

fn run_export_command<W: Write>(
    ledger: &Ledger,
    output: Option<&str>,
    format: ExportFormat,
    out: &mut W,
) -> Result<()> {
    let exporter = Exporter::new(ledger);

    // Determine output writer
    let writer: Box<dyn Write + '_> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(&mut *out),
    };

    match format {
        ExportFormat::Csv => {
            let count = exporter.export_transactions_csv(writer)?;
            if let Some(path) = output {
                tracing::info!(path, "Exported {} transactions", count);
            }
        }
        ExportFormat::Json => {
            let snapshot = exporter.export_summary_json(writer)?;
            if let Some(path) = output {
                tracing::info!(
                    path,
                    "Exported summary of {} transactions",
                    snapshot.transaction_count
                );
            }
        }
    }

    Ok(())
}
