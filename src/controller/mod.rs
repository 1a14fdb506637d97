//! Chat session controller.
//!
//! Drives the submit → send → render → (maybe) feedback cycle. The
//! controller is the only writer of the transcript and the feedback prompt
//! state; renderers read both after each operation.
//!
//! Every operation takes `&mut self`, so a controller never has more than
//! one request in flight.

mod prompt;
mod transcript;

pub use prompt::{FeedbackPrompt, LOW_CONFIDENCE_MARKER};
pub use transcript::{ChatMessage, Sender, Transcript};

use crate::api::{ChatBackend, Reward};
use crate::session::SessionId;

/// Shown in place of a reply when the chat request fails.
pub const CHAT_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Appended once feedback has been accepted.
pub const FEEDBACK_ACK: &str = "Feedback received. Thank you!";

/// Appended when the backend refuses to clear its history.
pub const CLEAR_ERROR_MESSAGE: &str = "Failed to clear chat history.";

/// Result of [`ChatController::submit_message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Input was blank; nothing happened.
    Ignored,
    /// The backend replied.
    Answered,
    /// The request failed and the error line was shown.
    Failed,
}

/// Result of [`ChatController::submit_feedback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackOutcome {
    /// The prompt was not shown, so no feedback was sent.
    NotOffered,
    Recorded,
    Failed,
}

/// A message already echoed to the transcript, waiting to be sent.
#[derive(Debug)]
#[must_use]
pub struct PendingMessage {
    text: String,
}

impl PendingMessage {
    pub fn text(&self) -> &str {
        &self.text
    }
}

pub struct ChatController<B> {
    backend: B,
    session: SessionId,
    transcript: Transcript,
    prompt: FeedbackPrompt,
    last_explanation: Option<serde_json::Value>,
}

impl<B: ChatBackend> ChatController<B> {
    pub fn new(backend: B, session: SessionId) -> Self {
        Self {
            backend,
            session,
            transcript: Transcript::default(),
            prompt: FeedbackPrompt::Hidden,
            last_explanation: None,
        }
    }

    pub const fn session(&self) -> &SessionId {
        &self.session
    }

    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub const fn prompt(&self) -> FeedbackPrompt {
        self.prompt
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Explanation attached to the most recent successful reply, if any.
    pub const fn last_explanation(&self) -> Option<&serde_json::Value> {
        self.last_explanation.as_ref()
    }

    /// Sends the content of `input` as a chat message.
    ///
    /// Blank input is left untouched and nothing is sent. Otherwise the
    /// trimmed text is echoed to the transcript, `input` is cleared, and the
    /// reply (or a fixed error line) is appended.
    pub async fn submit_message(&mut self, input: &mut String) -> Submission {
        match self.stage_message(input) {
            Some(pending) => self.send_message(pending).await,
            None => Submission::Ignored,
        }
    }

    /// First half of [`submit_message`](Self::submit_message): echoes the
    /// trimmed text and clears `input` without contacting the backend.
    ///
    /// Returns `None` for blank input.
    pub fn stage_message(&mut self, input: &mut String) -> Option<PendingMessage> {
        let text = input.trim().to_string();
        if text.is_empty() {
            return None;
        }

        self.append(Sender::You, &text);
        input.clear();
        Some(PendingMessage { text })
    }

    /// Second half of [`submit_message`](Self::submit_message): sends a
    /// staged message and appends the reply or the error line.
    pub async fn send_message(&mut self, pending: PendingMessage) -> Submission {
        match self.backend.chat(&self.session, &pending.text).await {
            Ok(reply) => {
                tracing::debug!(server_session = ?reply.session_id, "chat reply received");
                self.append(Sender::Bot, &reply.response);
                self.prompt = FeedbackPrompt::for_reply(&reply.response);
                self.last_explanation = reply.explanation;
                Submission::Answered
            }
            Err(e) => {
                tracing::error!(error = %e, "chat request failed");
                self.append(Sender::Bot, CHAT_ERROR_MESSAGE);
                Submission::Failed
            }
        }
    }

    /// Rates the last reply.
    ///
    /// Only accepted while the prompt is shown. The prompt is hidden before
    /// the request goes out, whatever its outcome. Failures are logged and
    /// leave no trace in the transcript.
    pub async fn submit_feedback(&mut self, reward: Reward) -> FeedbackOutcome {
        if !self.prompt.choices().contains(&reward) {
            return FeedbackOutcome::NotOffered;
        }

        self.prompt = FeedbackPrompt::Hidden;

        match self.backend.feedback(&self.session, reward).await {
            Ok(()) => {
                self.append(Sender::System, FEEDBACK_ACK);
                FeedbackOutcome::Recorded
            }
            Err(e) => {
                tracing::warn!(error = %e, %reward, "feedback request failed");
                FeedbackOutcome::Failed
            }
        }
    }

    /// Asks the backend to forget this session's conversation memory.
    ///
    /// The local transcript is kept.
    pub async fn clear_history(&mut self) -> bool {
        match self.backend.clear_history(&self.session).await {
            Ok(message) => {
                self.append(Sender::System, &message);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "clear history request failed");
                self.append(Sender::System, CLEAR_ERROR_MESSAGE);
                false
            }
        }
    }

    fn append(&mut self, sender: Sender, text: &str) {
        self.transcript.push(ChatMessage::new(sender, text));
    }
}
