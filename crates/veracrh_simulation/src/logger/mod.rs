//! Global logger for the simulation core
//!
//! Хост (headless runner, движок, тесты) подставляет свой `LogPrinter`.
//! Если никто ничего не подставил: логи молча отбрасываются.
//! Уровень ниже `min_level` отсекается до форматирования.

use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Printer + порог в одном слоте: один lock на сообщение
struct LoggerSlot {
    printer: Option<Box<dyn LogPrinter>>,
    min_level: LogLevel,
}

static LOGGER: Lazy<Mutex<LoggerSlot>> = Lazy::new(|| {
    Mutex::new(LoggerSlot {
        printer: None,
        min_level: LogLevel::Debug,
    })
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

pub trait LogPrinter: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

pub fn set_logger(logger: Box<dyn LogPrinter>) {
    LOGGER.lock().unwrap().printer = Some(logger);
}

/// Minimum level that reaches the printer.
pub fn set_log_level(level: LogLevel) {
    LOGGER.lock().unwrap().min_level = level;
}

/// Ставит printer только если слот пуст (повторный `init_logger` безвреден)
pub fn set_logger_if_needed(logger: Box<dyn LogPrinter>) {
    LOGGER.lock().unwrap().printer.get_or_insert(logger);
}

pub fn log(message: &str) {
    log_with_level(LogLevel::Debug, message);
}

pub fn log_info(message: &str) {
    log_with_level(LogLevel::Info, message);
}

pub fn log_warning(message: &str) {
    log_with_level(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    log_with_level(LogLevel::Error, message);
}

pub fn log_with_level(level: LogLevel, message: &str) {
    let slot = LOGGER.lock().unwrap();
    if level < slot.min_level {
        return;
    }

    if let Some(printer) = slot.printer.as_ref() {
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        printer.log(level, &format!("[{}] {}", timestamp, message));
    }
}

/// stdout, errors → stderr
pub struct ConsoleLogger;

impl LogPrinter for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Error => eprintln!("[{}] {}", level.as_str(), message),
            _ => println!("[{}] {}", level.as_str(), message),
        }
    }
}

pub fn init_logger() {
    set_logger_if_needed(Box::new(ConsoleLogger));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert_eq!(LogLevel::Warning.as_str(), "WARNING");
    }

    struct Capture(Arc<Mutex<Vec<String>>>);

    impl LogPrinter for Capture {
        fn log(&self, level: LogLevel, message: &str) {
            self.0.lock().unwrap().push(format!("{} {}", level.as_str(), message));
        }
    }

    #[test]
    fn test_min_level_filters_messages() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        set_logger(Box::new(Capture(lines.clone())));
        set_log_level(LogLevel::Warning);

        log("filtered debug line");
        log_info("filtered info line");
        log_error("kept error line");

        set_log_level(LogLevel::Debug);

        let lines = lines.lock().unwrap();
        assert!(lines.iter().any(|line| line.starts_with("ERROR") && line.ends_with("kept error line")));
        assert!(!lines.iter().any(|line| line.contains("filtered")));
    }
}
