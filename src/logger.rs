use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins when set. `--debug` only raises this crate's own events.
fn default_directives(debug: bool) -> &'static str {
    if debug {
        "info,headset_notifier=debug"
    } else {
        "info"
    }
}

pub fn init(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(debug)))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|e| anyhow!(e))
}
