// src/transport/mod.rs

use crate::error::TransportError;
use crate::protocol::{HealthStatus, HumaniseReply, HumaniseRequest};

/// A way of reaching the humanise service.
pub trait Transport {
    /// One call, no retries.
    fn humanise(&self, request: &HumaniseRequest) -> Result<HumaniseReply, TransportError>;

    fn health(&self) -> Result<HealthStatus, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn humanise(&self, request: &HumaniseRequest) -> Result<HumaniseReply, TransportError> {
        (**self).humanise(request)
    }

    fn health(&self) -> Result<HealthStatus, TransportError> {
        (**self).health()
    }
}

pub mod http;
pub use http::HttpTransport;
