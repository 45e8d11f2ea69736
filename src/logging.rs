//! Logging setup
//!
//! Logs go to stderr so stdout only ever carries the report. The level comes
//! from the `-v` count alone; the environment is not consulted.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for a `-v` count
pub fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "tutorial_metadata=warn",
        1 => "tutorial_metadata=info",
        2 => "tutorial_metadata=debug",
        _ => "tutorial_metadata=trace",
    }
}

pub fn init_cli_logger(verbosity: u8) {
    tracing_subscriber::registry()
        .with(EnvFilter::new(filter_for(verbosity)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
