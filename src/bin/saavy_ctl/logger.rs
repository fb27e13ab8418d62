use log::{Level, Log, Metadata, Record};

/// Minimal stderr logger. The level comes from `SAAVY_LOG`
/// (`error`, `warn`, `info`, `debug`, `trace`), default `info`.
struct StderrLogger {
    level: Level,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

fn parse_level(value: Option<&str>) -> Level {
    value
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::Info)
}

pub fn init() -> Result<(), log::SetLoggerError> {
    let level = parse_level(std::env::var("SAAVY_LOG").ok().as_deref());

    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn level_defaults_to_info() {
        assert_eq!(parse_level(None), Level::Info);
        assert_eq!(parse_level(Some("loud")), Level::Info);
    }

    #[test]
    fn level_sets_matching_max_filter() {
        let level = parse_level(Some("debug"));
        assert_eq!(level, Level::Debug);
        assert_eq!(level.to_level_filter(), LevelFilter::Debug);
    }
}
