//! Logger setup for the command-line binary.

/// Initializes `env_logger`, debug level when verbose and warnings only otherwise.
///
/// `RUST_LOG` still takes precedence when it is set.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn })
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
