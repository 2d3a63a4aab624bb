//! Spellcheck CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, debug};

use spellcheck::cli::args::*;
use spellcheck::cli::commands::*;
use spellcheck::error::SpellcheckError;

/// Overrides the `-v`/`-q` level, e.g. `SPELLCHECK_LOG=spellcheck::spelling=trace`.
const LOG_ENV: &str = "SPELLCHECK_LOG";

/// Map the verbosity count to a log level. Per-query search detail is only
/// logged at trace.
fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Rejected input exits with 2, everything else with 1.
fn exit_code(error: &SpellcheckError) -> i32 {
    match error {
        SpellcheckError::InvalidArgument(_) | SpellcheckError::InvalidConfig(_) => 2,
        _ => 1,
    }
}

fn main() {
    let args = SpellcheckArgs::parse();
    let level = log_level(args.verbosity());

    Builder::new()
        .filter_level(level)
        .parse_env(LOG_ENV)
        .format(move |buf, record| {
            if level >= LevelFilter::Debug {
                writeln!(
                    buf,
                    "[{}] {} ({})",
                    record.level(),
                    record.args(),
                    record.module_path().unwrap_or("?")
                )
            } else {
                writeln!(buf, "[{}] {}", record.level(), record.args())
            }
        })
        .init();

    debug!("spellcheck {} starting", spellcheck::VERSION);

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(exit_code(&e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), LevelFilter::Error);
        assert_eq!(log_level(1), LevelFilter::Warn);
        assert_eq!(log_level(3), LevelFilter::Debug);
        assert_eq!(log_level(4), LevelFilter::Trace);
        assert_eq!(log_level(9), LevelFilter::Trace);
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(exit_code(&SpellcheckError::invalid_argument("x")), 2);
        assert_eq!(exit_code(&SpellcheckError::invalid_config("x")), 2);
        let io_error = io::Error::new(io::ErrorKind::Other, "disk");
        assert_eq!(exit_code(&SpellcheckError::from(io_error)), 1);
    }
}
