use std::io::IsTerminal;

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install a stderr subscriber. `RUST_LOG` wins when set; otherwise only
/// warnings are shown, or everything from our crates at `debug` with
/// `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "warn,coverage=debug,coverage_engine=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .without_time()
                .with_target(verbose)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
