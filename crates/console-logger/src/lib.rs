//! Console Logger
//!
//! `log` backend for browser applications. Each record is written to the
//! matching `console.*` method as `[HH:MM:SS.mmm LEVEL app::target] message`.

use std::sync::OnceLock;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Logger writing to the devtools console
pub struct ConsoleLogger {
    app_name: &'static str,
    level: LevelFilter,
}

impl ConsoleLogger {
    fn style(level: Level) -> &'static str {
        match level {
            Level::Error => "color: #c0392b; font-weight: bold",
            Level::Warn => "color: #d35400",
            Level::Info => "color: #2c3e50",
            Level::Debug | Level::Trace => "color: #7f8c8d",
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let time = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(
            &time,
            record.level(),
            self.app_name,
            record.target(),
            &record.args().to_string(),
        );
        let text = JsValue::from_str(&format!("%c{}", line));
        let style = JsValue::from_str(Self::style(record.level()));
        match record.level() {
            Level::Error => web_sys::console::error_2(&text, &style),
            Level::Warn => web_sys::console::warn_2(&text, &style),
            Level::Info => web_sys::console::info_2(&text, &style),
            Level::Debug | Level::Trace => web_sys::console::debug_2(&text, &style),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Calling it twice returns the `SetLoggerError` from the second attempt.
pub fn init(app_name: &'static str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger { app_name, level });
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Parse a level name such as `debug`; unknown names fall back to `Info`
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Build one console line
pub fn format_line(time: &str, level: Level, app_name: &str, target: &str, message: &str) -> String {
    // Targets are crate paths; keep only the module part after the crate name
    let module = target.split_once("::").map(|(_, rest)| rest).unwrap_or(target);
    if module == target {
        format!("[{} {:<5} {}] {}", time, level, app_name, message)
    } else {
        format!("[{} {:<5} {}::{}] {}", time, level, app_name, module, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_with_module() {
        let line = format_line("09:15:02.120", Level::Warn, "CookUs", "cookus_ui::api::client", "refresh failed");
        assert_eq!(line, "[09:15:02.120 WARN  CookUs::api::client] refresh failed");
    }

    #[test]
    fn test_format_line_crate_root() {
        let line = format_line("23:59:59.999", Level::Info, "Store", "storefront", "mounted");
        assert_eq!(line, "[23:59:59.999 INFO  Store] mounted");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }
}
