// src/validation/mod.rs

pub mod input;

pub use input::{InputValidationError, validate_input};
