//! Minimal `log` backend writing to stderr

use log::{LevelFilter, Metadata, Record};
use std::env;
use std::io::Write;

/// Environment variable holding the log level (`error`, `warn`, `info`, `debug`, `trace`)
pub const LOG_ENV: &str = "WORDLE_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr().lock(),
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Resolve the level: `verbose` wins, then `WORDLE_LOG`, then `warn`
#[must_use]
pub fn level_from(verbose: bool, env_value: Option<&str>) -> LevelFilter {
    if verbose {
        return LevelFilter::Debug;
    }
    env_value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the logger; later calls only adjust the level
pub fn init_logging(verbose: bool) {
    let level = level_from(verbose, env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_overrides_env() {
        assert_eq!(level_from(true, Some("error")), LevelFilter::Debug);
    }

    #[test]
    fn env_level_is_parsed() {
        assert_eq!(level_from(false, Some("trace")), LevelFilter::Trace);
        assert_eq!(level_from(false, Some("INFO")), LevelFilter::Info);
    }

    #[test]
    fn bad_or_missing_env_defaults_to_warn() {
        assert_eq!(level_from(false, Some("loud")), LevelFilter::Warn);
        assert_eq!(level_from(false, None), LevelFilter::Warn);
    }
}
