pub mod build_info;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "projection_core=info";

/// Initializes the global tracing subscriber. `RUST_LOG` wins over
/// `verbosity`; events go to stderr so report output stays clean.
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let directive = match verbosity {
            0 => DEFAULT_DIRECTIVE,
            1 => "projection_core=debug",
            _ => "projection_core=trace",
        };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
