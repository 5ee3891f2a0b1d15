//! Process-wide logger setup for the `dupcheck` binary.
//!
//! Library code never installs a logger; it writes through the `log` facade
//! (see [`crate::checker::diagnostics`]). The level is taken from, in order:
//!
//! 1. `RUST_LOG` if set
//! 2. `--quiet` (errors only) or `--verbose` (debug, trace)
//! 3. warn otherwise, so reports on stdout stay uncluttered

use env_logger::Builder;
use log::LevelFilter;
use std::env;
use std::io::Write;

/// Installs `env_logger`. Call once, before any logging.
pub fn init_logging(verbose: u8, quiet: bool) {
    let mut builder = Builder::new();

    let from_env = env::var("RUST_LOG").is_ok();
    if from_env {
        builder.parse_default_env();
    } else {
        builder.filter_level(determine_level(verbose, quiet));
    }

    if verbose > 0 {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{} {} {}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    }

    builder.target(env_logger::Target::Stderr);

    // A second init (tests, embedding) keeps the first logger.
    if builder.try_init().is_ok() && !from_env {
        log::debug!(
            "logging initialized at level {:?}",
            determine_level(verbose, quiet)
        );
    }
}

fn determine_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(determine_level(2, true), LevelFilter::Error);
    }

    #[test]
    fn verbosity_steps() {
        assert_eq!(determine_level(0, false), LevelFilter::Warn);
        assert_eq!(determine_level(1, false), LevelFilter::Debug);
        assert_eq!(determine_level(5, false), LevelFilter::Trace);
    }
}
