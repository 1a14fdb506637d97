use crate::api::Reward;

/// Marker the backend appends to replies it is unsure about.
pub const LOW_CONFIDENCE_MARKER: &str = "Note: This response may need improvement.";

/// Whether the user is currently being asked to rate the last reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackPrompt {
    #[default]
    Hidden,
    Shown,
}

impl FeedbackPrompt {
    /// Prompt state implied by a bot reply: shown iff the marker is present.
    pub fn for_reply(response: &str) -> Self {
        if response.contains(LOW_CONFIDENCE_MARKER) {
            Self::Shown
        } else {
            Self::Hidden
        }
    }

    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }

    /// Rewards the user may pick right now.
    pub const fn choices(self) -> &'static [Reward] {
        match self {
            Self::Shown => &[Reward::Positive, Reward::Negative],
            Self::Hidden => &[],
        }
    }
}
