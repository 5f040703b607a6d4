use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Logs go to stderr so stdout only carries journal output.
/// `RUST_LOG` wins over `--verbose`.
pub fn init_logger(verbose: bool) {
    let default = if verbose {
        "auroralog=debug,auroralog_core=debug"
    } else {
        "auroralog=warn,auroralog_core=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
