// src/view/mod.rs

use crate::model::{Phase, SessionState};
use colored::Colorize;

pub const BUSY_LABEL: &str = "Humanising...";
pub const OUTPUT_HEADING: &str = "Humanised Text";

pub fn busy_line() -> String {
    BUSY_LABEL.yellow().to_string()
}

/// Terminal rendering of a session: the busy line, the error in red, or the
/// output under its heading. Idle with nothing to show renders empty.
pub fn render(state: &SessionState) -> String {
    let mut out = String::new();

    if state.is_busy {
        out.push_str(&busy_line());
        out.push('\n');
    }

    if !state.error_message.is_empty() {
        out.push_str(&state.error_message.red().to_string());
        out.push('\n');
    }

    if !state.output_text.is_empty() {
        out.push_str(&OUTPUT_HEADING.bold().to_string());
        out.push('\n');
        out.push_str(&state.output_text);
        out.push('\n');
    } else if state.phase == Phase::Success {
        out.push_str(&"(empty response)".dimmed().to_string());
        out.push('\n');
    }

    out
}
