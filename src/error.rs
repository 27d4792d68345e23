//! Outcome taxonomy for failed actions.
//!
//! Every failure of a remote action is classified exactly once, at the
//! network boundary (`network::decode`), into one of these variants.  None of
//! them propagate past the controller: each maps to a message on a result
//! surface, except [`ActionError::AuthChallengeRequired`] which opens the
//! guest challenge instead.

use thiserror::Error;

use crate::constants::{
    FALLBACK_ERROR_MESSAGE, FALLBACK_NETWORK_MESSAGE, FALLBACK_SERVER_MESSAGE,
};
use crate::models::OutcomeStatus;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The remote said the input itself is invalid; the user can fix it.
    #[error("rejected: {}", .message.as_deref().unwrap_or("invalid input"))]
    ValidationRejected { message: Option<String> },

    /// Remote-side fault (5xx, throttling).  Retry later.
    #[error("server fault: {}", .message.as_deref().unwrap_or("no details"))]
    ServerFault { message: Option<String> },

    /// No response reached us: transport error or timeout.
    #[error("network failure: {detail}")]
    NetworkFailure { detail: String },

    /// The actor is a guest and must verify before the action can proceed.
    #[error("verification required")]
    AuthChallengeRequired { message: Option<String> },

    /// Any other non-success shape.
    #[error("unexpected response (HTTP {status})")]
    Unexpected { status: u16, message: Option<String> },
}

impl ActionError {
    pub fn network(detail: impl Into<String>) -> Self {
        Self::NetworkFailure { detail: detail.into() }
    }

    pub fn status(&self) -> OutcomeStatus {
        match self {
            Self::ValidationRejected { .. } => OutcomeStatus::Rejected,
            Self::ServerFault { .. } => OutcomeStatus::ServerError,
            Self::NetworkFailure { .. } => OutcomeStatus::NetworkError,
            Self::AuthChallengeRequired { .. } => OutcomeStatus::AuthChallenge,
            Self::Unexpected { .. } => OutcomeStatus::Unexpected,
        }
    }

    /// Message supplied by the remote, if any.  Transport details are never
    /// shown to the user.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Self::ValidationRejected { message }
            | Self::ServerFault { message }
            | Self::AuthChallengeRequired { message }
            | Self::Unexpected { message, .. } => message.as_deref(),
            Self::NetworkFailure { .. } => None,
        }
    }

    /// Human readable text for a result surface.
    pub fn user_message(&self) -> String {
        self.remote_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback_message(self.status()).to_string())
    }
}

/// Generic copy used when the remote does not supply a message.
pub fn fallback_message(status: OutcomeStatus) -> &'static str {
    match status {
        OutcomeStatus::ServerError => FALLBACK_SERVER_MESSAGE,
        OutcomeStatus::NetworkError => FALLBACK_NETWORK_MESSAGE,
        _ => FALLBACK_ERROR_MESSAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_failures_never_leak_details() {
        let err = ActionError::network("TypeError: Failed to fetch");
        assert_eq!(err.status(), OutcomeStatus::NetworkError);
        assert_eq!(err.user_message(), FALLBACK_NETWORK_MESSAGE);
        assert!(err.to_string().contains("Failed to fetch"));
    }

    #[test]
    fn remote_message_wins_over_fallback() {
        let err = ActionError::ServerFault { message: Some("db down".into()) };
        assert_eq!(err.user_message(), "db down");

        let err = ActionError::ServerFault { message: None };
        assert_eq!(err.user_message(), FALLBACK_SERVER_MESSAGE);
    }
}
