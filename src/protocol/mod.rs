// src/protocol/mod.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const HUMANISE_PATH: &str = "/api/humanise";
pub const HEALTH_PATH: &str = "/api/health";

/// Body of `POST /api/humanise`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HumaniseRequest {
    pub text: String,
}

impl HumaniseRequest {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

/// What a successful humanise call handed back.
///
/// The server names the result `humanised`; older deployments used `output`.
/// It also echoes the submitted text as `original`, which we keep only for
/// diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HumaniseReply {
    pub humanised: Option<String>,
    pub output: Option<String>,
    pub original: Option<String>,
}

impl HumaniseReply {
    pub fn humanised(text: &str) -> Self {
        Self {
            humanised: Some(text.to_string()),
            ..Self::default()
        }
    }

    /// Reads a 2xx body. Anything that is not a JSON object, or whose fields
    /// are not strings, is treated as carrying no text.
    pub fn from_body(body: &str) -> Self {
        let Ok(json) = serde_json::from_str::<Value>(body) else {
            return Self::default();
        };

        Self {
            humanised: non_empty_str(&json, "humanised"),
            output: non_empty_str(&json, "output"),
            original: non_empty_str(&json, "original"),
        }
    }

    /// First present of `humanised`, `output`, else empty.
    pub fn into_text(self) -> String {
        self.humanised.or(self.output).unwrap_or_default()
    }
}

/// Pulls the `error` field out of a failure body, if there is one.
pub fn error_message(body: &str) -> Option<String> {
    let json = serde_json::from_str::<Value>(body).ok()?;
    non_empty_str(&json, "error")
}

fn non_empty_str(json: &Value, key: &str) -> Option<String> {
    json.get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Body of `GET /api/health`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
