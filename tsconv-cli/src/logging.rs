// ============================================================================
// tsconv-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger initialisation for the CLI
//
// The core library logs through the `log` facade; this module installs the
// env_logger backend once at startup.
//
// USAGE:
// - default: warnings and errors only, so prompts stay readable
// - --verbose: debug output from the readers, writers and collection
// - RUST_LOG=...: overrides both
//
// AI-ASSISTANT-INFO: Logging initialisation for the CLI

use env_logger::Env;
use log::LevelFilter;
use std::io::Write;

/// Returns the level used when RUST_LOG is not set.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initialises env_logger. Logs go to stderr so they never mix with
/// generated output written to stdout.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_level(verbose).as_str());
    let result = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args()
            )
        })
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized, verbose: {}", verbose);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(true), LevelFilter::Debug);
        assert_eq!(default_level(false), LevelFilter::Warn);
    }
}
