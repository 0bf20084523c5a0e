use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber. Logs go to stderr so stdout stays
/// usable for CSV/JSON output.
///
/// `RUST_LOG` takes precedence; otherwise `daybook=info`, or `daybook=debug`
/// when `verbose` is set. Only the first call has any effect.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "daybook=debug"
    } else {
        "daybook=info"
    }
}
