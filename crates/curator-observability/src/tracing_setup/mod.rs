//! Tracing initialization.

pub mod events;
pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use curator_core::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// `RUST_LOG` overrides `config.log_level` when set. Output goes to stderr so
/// command output on stdout stays machine-readable. Idempotent.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(filter);
        let result = if config.json_logs {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        };
        if let Err(e) = result {
            eprintln!("tracing already initialised: {e}");
        }
    });
}
