// src/controller/mod.rs

use crate::error::TransportError;
use crate::model::SessionState;
use crate::protocol::{HealthStatus, HumaniseReply, HumaniseRequest};
use crate::transport::Transport;
use crate::validation::validate_input;
use tracing::{debug, error, warn};

/// Handed out by `begin` for the one request that is allowed in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    request: HumaniseRequest,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &HumaniseRequest {
        &self.request
    }
}

/// Owns the session state and moves it through validate, request and render.
pub struct SubmissionController<T: Transport> {
    transport: T,
    state: SessionState,
    generation: u64,
}

impl<T: Transport> SubmissionController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: SessionState::new(),
            generation: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn edit(&mut self, input: &str) -> SessionState {
        self.state = self.state.edited(input);
        self.state.clone()
    }

    /// Validates `input` and, if it has content, marks the session busy.
    ///
    /// `Err` carries the state to show instead of dispatching: the validation
    /// failure, or the unchanged busy state when a request is already out.
    pub fn begin(&mut self, input: &str) -> Result<Ticket, SessionState> {
        if self.state.is_busy {
            warn!(
                generation = self.generation,
                "submit ignored, a request is already in flight"
            );
            return Err(self.state.clone());
        }

        let text = match validate_input(input) {
            Ok(text) => text,
            Err(err) => {
                self.state = self.state.rejected(input, err.message());
                return Err(self.state.clone());
            }
        };

        self.generation += 1;
        self.state = self.state.requesting(text);
        debug!(
            generation = self.generation,
            chars = text.chars().count(),
            "dispatching humanise request"
        );

        Ok(Ticket {
            generation: self.generation,
            request: HumaniseRequest::new(text),
        })
    }

    /// Applies the outcome of a request started by `begin`. Outcomes for any
    /// ticket other than the one currently in flight are dropped.
    pub fn settle(
        &mut self,
        ticket: &Ticket,
        outcome: Result<HumaniseReply, TransportError>,
    ) -> SessionState {
        if !self.state.is_busy || ticket.generation != self.generation {
            warn!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale humanise response"
            );
            return self.state.clone();
        }

        self.state = match outcome {
            Ok(reply) => self.state.succeeded(reply.into_text()),
            Err(err) => {
                error!(error = %err, "humanise request failed");
                self.state.failed(err.user_message())
            }
        };
        debug!(generation = self.generation, "settled\n{}", self.state.summary());
        self.state.clone()
    }

    /// Runs one full cycle: at most one network call, always ends not busy
    /// unless a request was already in flight.
    pub fn submit(&mut self, input: &str) -> SessionState {
        let ticket = match self.begin(input) {
            Ok(ticket) => ticket,
            Err(state) => return state,
        };

        let outcome = self.transport.humanise(ticket.request());
        self.settle(&ticket, outcome)
    }

    pub fn health(&self) -> Result<HealthStatus, TransportError> {
        self.transport.health()
    }
}
