//! Structured logging setup
//!
//! The library only emits `tracing` events. Embedders and tests that want
//! to see them install a subscriber with [`init_tracing`].

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable consulted for a filter override
pub const LOG_ENV: &str = "ROUTEGRAPH_LOG";

/// Install a stderr subscriber
///
/// `level` is either a bare level (`"debug"`) applied to this crate or a
/// full filter directive (`"routegraph=trace,warn"`). `RUST_LOG` and
/// `ROUTEGRAPH_LOG` take precedence when set. Fails if a global subscriber
/// is already installed.
pub fn init_tracing(
    level: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(directive(level.unwrap_or("warn"))));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

fn directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("routegraph={level}")
    }
}
