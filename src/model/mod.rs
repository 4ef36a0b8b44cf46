// src/model/mod.rs

/// Which way a submission failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    Request,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Requesting,
    Success,
    Failed(FailureKind),
}

/// Everything the user can see for one session.
///
/// Values are never mutated in place: each transition method returns the
/// next state. At most one of `output_text` and `error_message` is non-empty,
/// and `is_busy` holds exactly while `phase` is `Requesting`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub input_text: String,
    pub output_text: String,
    pub is_busy: bool,
    pub error_message: String,
    pub phase: Phase,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The user changed the input. A settled result stays on screen but the
    /// machine goes back to idle; an in-flight request is left alone.
    pub fn edited(&self, input: &str) -> Self {
        let phase = match self.phase {
            Phase::Requesting => Phase::Requesting,
            _ => Phase::Idle,
        };
        Self {
            input_text: input.to_string(),
            phase,
            ..self.clone()
        }
    }

    pub fn rejected(&self, input: &str, message: &str) -> Self {
        Self {
            input_text: input.to_string(),
            output_text: String::new(),
            is_busy: false,
            error_message: message.to_string(),
            phase: Phase::Failed(FailureKind::Validation),
        }
    }

    pub fn requesting(&self, input: &str) -> Self {
        Self {
            input_text: input.to_string(),
            output_text: String::new(),
            is_busy: true,
            error_message: String::new(),
            phase: Phase::Requesting,
        }
    }

    pub fn succeeded(&self, output: String) -> Self {
        Self {
            input_text: self.input_text.clone(),
            output_text: output,
            is_busy: false,
            error_message: String::new(),
            phase: Phase::Success,
        }
    }

    pub fn failed(&self, message: String) -> Self {
        Self {
            input_text: self.input_text.clone(),
            output_text: String::new(),
            is_busy: false,
            error_message: message,
            phase: Phase::Failed(FailureKind::Request),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.phase, Phase::Failed(_))
    }

    pub fn summary(&self) -> String {
        let status = match self.phase {
            Phase::Idle => "Idle",
            Phase::Requesting => "Requesting",
            Phase::Success => "Success",
            Phase::Failed(FailureKind::Validation) => "Failed (validation)",
            Phase::Failed(FailureKind::Request) => "Failed (request)",
        };
        format!(
            "Status: {}\nInput: {} chars\nOutput: {} chars",
            status,
            self.input_text.chars().count(),
            self.output_text.chars().count()
        )
    }
}
