//! Log output for the `seqid` binary.
//!
//! Identifiers are the program's only stdout output, so every log line goes
//! to stderr. The filter is read from `RUST_LOG` and defaults to `info`; use
//! `RUST_LOG=seqid=trace` to see each step of the sequence.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_line_number(true)
                .with_target(false)
                .with_file(true),
        )
        .try_init()?;
    Ok(())
}
