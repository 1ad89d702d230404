//! Tracing subscriber setup
//!
//! Console logs use a compact colored format. The TUI owns the terminal, so
//! in that mode logs only go to a file, if one was requested.

use colored::{ColoredString, Colorize};
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

/// Where log output should go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// Colored lines on stderr
    Stderr,
    /// Plain lines appended to a file
    File(&'a Path),
    /// No logging at all
    Disabled,
}

/// One-line event format with a colored level marker
pub struct GameFormatter;

impl<S, N> FormatEvent<S, N> for GameFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level()
        {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        if writer.has_ansi_escapes() {
            write!(writer, "{} ", color_func(symbol.into()))?;
        } else {
            write!(writer, "{symbol} {}: ", meta.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Default level filter for a `-v` count
#[must_use]
pub const fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the verbosity level.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_logging(verbose: u8, target: LogTarget<'_>) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    // ANSI must be chosen before the default event format is replaced
    let builder = tracing_subscriber::fmt()
        .with_ansi(!matches!(target, LogTarget::File(_)))
        .with_env_filter(filter)
        .event_format(GameFormatter);

    // A second init (e.g. from tests) keeps the first subscriber
    match target {
        LogTarget::Stderr => {
            let _ = builder.with_writer(io::stderr).try_init();
        }
        LogTarget::File(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            let _ = builder.with_writer(Mutex::new(file)).try_init();
        }
        LogTarget::Disabled => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(9), "trace");
    }

    #[test]
    fn disabled_target_installs_nothing() {
        assert!(init_logging(3, LogTarget::Disabled).is_ok());
    }

    #[test]
    fn file_target_creates_log_file() {
        let path = std::env::temp_dir().join(format!("wordle_game_log_{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);

        assert!(init_logging(2, LogTarget::File(&path)).is_ok());
        assert!(path.exists());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn file_target_reports_unwritable_path() {
        let path = Path::new("/nonexistent/dir/wordle.log");
        assert!(init_logging(2, LogTarget::File(path)).is_err());
    }
}
