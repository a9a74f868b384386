//! Logging setup shared by the binaries.
//!
//! `RUST_LOG` wins when set; otherwise the `-v` count picks the level for
//! the Figsel crates.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "fig_core=info,fig_gui=info,fig_cli=info,warn",
        _ => "fig_core=debug,fig_gui=debug,fig_cli=debug,info",
    }
}

/// Install the global fmt subscriber. Later calls are no-ops.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
