//! Logger setup for the binary

use log::LevelFilter;

/// Map repeated `-v` flags to a log level
#[must_use]
pub const fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install `env_logger` at the level chosen by `verbosity`
///
/// `RUST_LOG`, when set, overrides the level. Returns `false` if a logger was
/// already installed, in which case the existing one is kept.
pub fn init(verbosity: u8) -> bool {
    match env_logger::Builder::new()
        .filter_level(level_from_verbosity(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .try_init()
    {
        Ok(()) => true,
        Err(err) => {
            log::trace!("Keeping existing logger: {err}");
            false
        }
    }
}
