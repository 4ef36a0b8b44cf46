// src/lib.rs

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod protocol;
pub mod transport;
pub mod validation;
pub mod view;

pub use config::ClientConfig;
pub use controller::{SubmissionController, Ticket};
pub use error::{ConfigError, TransportError};
pub use model::{FailureKind, Phase, SessionState};
pub use transport::{HttpTransport, Transport};
