//! An in-memory day book: record income and expense transactions, then ask
//! for the totals.
//!
//! ```
//! use daybook::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.add_transaction("2025-01-28", "Venta de servicios", 50000, "ingreso")?;
//! ledger.add_transaction("2025-01-29", "Pago de luz", 12050, "egreso")?;
//!
//! let summary = ledger.summarize();
//! assert_eq!(summary.net_balance, 37950);
//! # Ok::<(), daybook::ValidationError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod io;
pub mod logging;

pub use domain::*;
