//! Rendering of log events and JSON responses.

use serde::Serialize;
use vbench_toolchain::{LogEvent, Severity};

use crate::ui;

const RESET: &str = "\x1b[0m";

/// ANSI style for a severity, `None` for undecorated tool output.
const fn style(severity: Severity) -> Option<&'static str> {
    match severity {
        Severity::Info => Some("\x1b[36m"),
        Severity::Success => Some("\x1b[32m"),
        Severity::Warning => Some("\x1b[33m"),
        Severity::Error => Some("\x1b[31m"),
        Severity::Header => Some("\x1b[1m"),
        Severity::None => None,
    }
}

/// Format one event as a display line.
fn format_event(event: &LogEvent, color: bool) -> String {
    let text = if event.severity == Severity::Header {
        format!("--- {} ---", event.text)
    } else {
        event.text.clone()
    };
    match style(event.severity) {
        Some(code) if color => format!("{code}{text}{RESET}"),
        _ => text,
    }
}

/// Print one pipeline event to stdout, colored per severity when enabled.
pub fn print_event(event: &LogEvent) {
    println!("{}", format_event(event, ui::prefs().color));
}

/// Print a serializable response as pretty JSON.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vbench_toolchain::LogEvent;

    use super::format_event;

    #[test]
    fn plain_output_is_undecorated_even_in_color_mode() {
        let event = LogEvent::plain("raw tool output");
        assert_eq!(format_event(&event, true), "raw tool output");
    }

    #[test]
    fn colored_error_wraps_with_ansi() {
        let event = LogEvent::error("boom");
        assert_eq!(format_event(&event, true), "\x1b[31mboom\x1b[0m");
        assert_eq!(format_event(&event, false), "boom");
    }

    #[test]
    fn headers_get_a_divider() {
        let event = LogEvent::header("simulation output");
        assert_eq!(format_event(&event, false), "--- simulation output ---");
    }
}
