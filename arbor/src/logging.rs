//! Diagnostic logging to stderr.

use tracing_subscriber::{EnvFilter, prelude::*};

/// Install the fmt subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: u8) {
    let default = match verbose {
        0 => "arbor=info",
        1 => "arbor=debug",
        _ => "arbor=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("warning: tracing subscriber already initialized");
    }
}
