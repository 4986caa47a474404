//! Logging setup
//!
//! Diagnostics go through the `log` facade to stderr. User-facing results are
//! printed separately, so raising verbosity never changes stdout.

use log::LevelFilter;

/// Map `-v` occurrences to a level filter
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
///
/// `RUST_LOG`, when set, takes precedence over the verbosity flag.
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbosity))
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env();

    // A logger may already be installed (tests, embedding)
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(7), LevelFilter::Trace);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(0);
        init(3);
    }
}
