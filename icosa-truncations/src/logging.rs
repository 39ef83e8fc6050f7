use slog::{Drain, Level, Logger};

/// Root logger for the command line tool: human-readable output to the
/// terminal, written from a background thread.
///
/// Records below `level` are dropped. The async drain flushes when the last
/// clone of the returned logger is dropped, so let it go out of scope before
/// exiting the process.
pub fn terminal_logger(level: Level) -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let drain = slog::LevelFilter::new(drain, level).fuse();
    Logger::root(drain, o!("icosa_version" => env!("CARGO_PKG_VERSION")))
}

/// A logger that goes nowhere, for tests and for library users that don't
/// care.
pub fn discard_logger() -> Logger {
    Logger::root(slog::Discard, o!())
}

/// `Info` by default; each extra `-v` lowers the threshold one step.
pub fn level_for_verbosity(verbosity: u64) -> Level {
    match verbosity {
        0 => Level::Info,
        1 => Level::Debug,
        _ => Level::Trace,
    }
}
