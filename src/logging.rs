//! Console Logger
//!
//! `log` backend writing to the browser devtools console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger {
    level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::log_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    match log::set_boxed_logger(Box::new(ConsoleLogger { level })) {
        Ok(()) => log::set_max_level(level),
        Err(e) => web_sys::console::warn_1(&format!("[logging] {}", e).into()),
    }
}

/// `[module] message`, keeping only the last path segment of the target
fn format_line(target: &str, message: &str) -> String {
    let module = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}", module, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_short_target() {
        assert_eq!(
            format_line("dog_match_ui::components::search_page", "Loaded 12 dogs"),
            "[search_page] Loaded 12 dogs"
        );
        assert_eq!(format_line("dog_api", "x"), "[dog_api] x");
    }
}
