//! srclint binary entry point.
//!
//! Thin shell around [`srclint_core::Driver`]: pick a log level from the raw
//! arguments, read the embedding switch from the environment exactly once,
//! run the driver against the real streams, and hand the resulting status to
//! the exit coordinator.

use std::env;
use std::io;

use srclint_core::{debug_requested, Driver, ExitCoordinator, NoopEngine};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    init_tracing(debug_requested(&args));

    // The only ambient read: everything downstream gets the mode explicitly.
    let mut coordinator = ExitCoordinator::from_environment();

    let driver = Driver::new(NoopEngine);
    let status = driver.run(&args, &mut io::stdout(), &mut io::stderr());

    coordinator.finish(status);
}

/// Initializes logging. Diagnostics go to stderr so usage text on stdout
/// stays machine-consumable; `RUST_LOG` overrides the level picked from the
/// `-debug` flag.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}
