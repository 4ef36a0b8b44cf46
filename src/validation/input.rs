// src/validation/input.rs

pub const EMPTY_INPUT_MESSAGE: &str = "Please provide some text.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputValidationError {
    Empty,
}

impl InputValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            InputValidationError::Empty => EMPTY_INPUT_MESSAGE,
        }
    }
}

/// Presence check only. The text is returned untouched, surrounding
/// whitespace included. A byte order mark counts as blank.
pub fn validate_input(input: &str) -> Result<&str, InputValidationError> {
    if input
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
    {
        return Err(InputValidationError::Empty);
    }
    Ok(input)
}
