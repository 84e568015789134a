use slog::{Drain, Level, Logger, o};

/// Async terminal logger on stderr, filtered at `level`.
pub fn create_root_logger(level: Level) -> Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::CompactFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let drain = drain.filter_level(level).fuse();

    Logger::root(drain, o!("app" => "freetime"))
}
