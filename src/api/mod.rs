//! Wire contract with the chat backend.

mod client;
mod error;
mod types;

pub use client::{ChatBackend, HttpBackend};
pub use error::ApiError;
pub use types::{ChatReply, ChatRequest, FeedbackRequest, Reward, ServerMessage};
