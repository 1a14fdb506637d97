use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /chat/`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub user_input: &'a str,
    pub session_id: &'a str,
}

/// Body returned by `POST /chat/`.
///
/// Only `response` is required; the backend may attach more.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub explanation: Option<serde_json::Value>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Body of `POST /feedback/`.
#[derive(Debug, Serialize)]
pub struct FeedbackRequest<'a> {
    pub session_id: &'a str,
    pub reward: Reward,
}

/// `{"message": ...}` bodies from the health and clear endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerMessage {
    pub message: String,
}

/// User satisfaction with the latest bot reply. Serialized as `1` or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Reward {
    Positive,
    Negative,
}

impl Reward {
    pub const fn value(self) -> i8 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }
}

impl From<Reward> for i8 {
    fn from(reward: Reward) -> Self {
        reward.value()
    }
}

impl TryFrom<i8> for Reward {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Positive),
            -1 => Ok(Self::Negative),
            other => Err(format!("reward must be 1 or -1, got {other}")),
        }
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.value())
    }
}
