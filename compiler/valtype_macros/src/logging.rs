//! Tracing for macro expansion.
//!
//! Expansion runs inside the compiler process, so nothing is installed
//! unless `VALTYPE_LOG` is set. The variable takes `EnvFilter` syntax,
//! e.g. `VALTYPE_LOG=valtype_codegen=debug`. Output goes to stderr.

use std::sync::Once;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "VALTYPE_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the subscriber on first use. Later calls are no-ops, and an
/// already-installed global subscriber is left alone.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os(LOG_ENV).is_some() {
            let filter = EnvFilter::from_env(LOG_ENV);
            let _ = tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .try_init();
        }
    });
}
