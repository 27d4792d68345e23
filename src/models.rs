//! Data types shared by the reducer, the network layer and the DOM surface.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::attachment;
use crate::error::ActionError;

// ---------------------------------------------------------------------------
// Identities
// ---------------------------------------------------------------------------

/// The user-triggerable operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    SubmitReport,
    ToggleReaction,
    RequestOtp,
    VerifyOtp,
    SendChat,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::SubmitReport => "submit-report",
            ActionKind::ToggleReaction => "toggle-reaction",
            ActionKind::RequestOtp => "request-otp",
            ActionKind::VerifyOtp => "verify-otp",
            ActionKind::SendChat => "send-chat",
        }
    }

    /// Region that displays this kind's outcome.  Reactions have none, their
    /// failures are toasted.
    pub fn result_surface(&self) -> Option<SurfaceId> {
        match self {
            ActionKind::SubmitReport => Some(SurfaceId::ReportResult),
            ActionKind::ToggleReaction => None,
            ActionKind::RequestOtp | ActionKind::VerifyOtp => Some(SurfaceId::ChallengePanel),
            ActionKind::SendChat => Some(SurfaceId::ChatPanel),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of the control that initiated an action.  Matches the element's
/// `data-trigger` attribute (or its id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(pub String);

impl TriggerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reaction buttons are keyed by report and reaction type so concurrent
    /// toggles on different buttons never share a guard.
    pub fn reaction(report_id: &str, reaction_type: &str) -> Self {
        Self(format!("reaction:{}:{}", report_id, reaction_type))
    }
}

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceId {
    ReportResult,
    ChallengePanel,
    ChatPanel,
}

/// Presentation mode of a result surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiStage {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// A file picked in the attachment input.  `file` is `None` when only the
/// name is known (tests, drag previews).
#[derive(Debug, Clone)]
pub struct Attachment {
    pub name: String,
    pub file: Option<web_sys::File>,
}

impl Attachment {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), file: None }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReportDraft {
    pub report_type: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Clone)]
pub enum ActionPayload {
    Report(ReportDraft),
    Reaction { reaction_type: String },
    RequestOtp { email: String },
    VerifyOtp { email: String, code: String },
    Chat { message: String },
}

/// One outgoing attempt.  Consumed by the executor, never retained.
#[derive(Debug, Clone)]
pub struct ActionRequest {
    pub kind: ActionKind,
    pub target: Option<String>,
    pub payload: ActionPayload,
}

impl ActionRequest {
    pub fn submit_report(draft: ReportDraft) -> Self {
        Self { kind: ActionKind::SubmitReport, target: None, payload: ActionPayload::Report(draft) }
    }

    pub fn toggle_reaction(report_id: impl Into<String>, reaction_type: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::ToggleReaction,
            target: Some(report_id.into()),
            payload: ActionPayload::Reaction { reaction_type: reaction_type.into() },
        }
    }

    pub fn request_otp(email: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::RequestOtp,
            target: None,
            payload: ActionPayload::RequestOtp { email: email.into() },
        }
    }

    pub fn verify_otp(email: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::VerifyOtp,
            target: None,
            payload: ActionPayload::VerifyOtp { email: email.into(), code: code.into() },
        }
    }

    pub fn send_chat(message: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::SendChat,
            target: None,
            payload: ActionPayload::Chat { message: message.into() },
        }
    }

    /// Text fields in the order the endpoint expects them.  The attachment
    /// (if any) is appended separately by the executor because it is a
    /// `Blob`, not a string.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        match &self.payload {
            ActionPayload::Report(draft) => vec![
                ("type", draft.report_type.trim().to_string()),
                ("category", draft.category.trim().to_string()),
                ("title", draft.title.clone()),
                ("description", draft.description.clone()),
            ],
            ActionPayload::Reaction { reaction_type } => vec![("reactionType", reaction_type.clone())],
            ActionPayload::RequestOtp { email } => vec![("email", email.trim().to_string())],
            ActionPayload::VerifyOtp { email, code } => vec![
                ("email", email.trim().to_string()),
                ("otp", code.trim().to_string()),
            ],
            ActionPayload::Chat { message } => vec![("message", message.clone())],
        }
    }

    /// Multipart bodies are only needed when a file travels with the request.
    pub fn needs_multipart(&self) -> bool {
        matches!(self.payload, ActionPayload::Report(_))
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        match &self.payload {
            ActionPayload::Report(draft) => draft.attachment.as_ref(),
            _ => None,
        }
    }

    /// Checks that must pass before anything goes on the wire.  Returns the
    /// offending attachment names on failure.
    pub fn preflight(&self) -> Result<(), Vec<String>> {
        match self.attachment() {
            Some(att) => attachment::validate_names([att.name.as_str()]),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    Pending,
    Success,
    Rejected,
    ServerError,
    NetworkError,
    AuthChallenge,
    Unexpected,
}

impl OutcomeStatus {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            OutcomeStatus::Rejected
                | OutcomeStatus::ServerError
                | OutcomeStatus::NetworkError
                | OutcomeStatus::Unexpected
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionAction {
    Created,
    Updated,
    Removed,
    #[serde(other)]
    Unknown,
}

/// Counter changes returned by a reaction toggle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReactionUpdate {
    pub action: Option<ReactionAction>,
    pub counts: BTreeMap<String, u64>,
    pub total: Option<u64>,
}

/// Decoded success of a remote action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionSuccess {
    ReportAccepted { message: Option<String>, redirect_url: Option<String> },
    Reaction(ReactionUpdate),
    CodeSent { message: Option<String> },
    Verified { message: Option<String> },
    ChatReply { text: String },
}

/// Result of one request, as the reducer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub kind: ActionKind,
    pub target: Option<String>,
    pub status: OutcomeStatus,
    pub message: Option<String>,
    pub redirect_url: Option<String>,
    pub reaction: Option<ReactionUpdate>,
}

impl ActionOutcome {
    pub fn pending(kind: ActionKind, target: Option<String>) -> Self {
        Self {
            kind,
            target,
            status: OutcomeStatus::Pending,
            message: None,
            redirect_url: None,
            reaction: None,
        }
    }

    pub fn from_result(
        kind: ActionKind,
        target: Option<String>,
        result: Result<ActionSuccess, ActionError>,
    ) -> Self {
        let mut outcome = Self::pending(kind, target);
        match result {
            Ok(success) => {
                outcome.status = OutcomeStatus::Success;
                match success {
                    ActionSuccess::ReportAccepted { message, redirect_url } => {
                        outcome.message = message;
                        outcome.redirect_url = redirect_url.filter(|u| !u.trim().is_empty());
                    }
                    ActionSuccess::Reaction(update) => outcome.reaction = Some(update),
                    ActionSuccess::CodeSent { message } | ActionSuccess::Verified { message } => {
                        outcome.message = message;
                    }
                    ActionSuccess::ChatReply { text } => outcome.message = Some(text),
                }
            }
            Err(err) => {
                outcome.status = err.status();
                outcome.message = err.remote_message().map(str::to_string);
            }
        }
        outcome
    }

    /// A successful submission that is about to leave the page.
    pub fn navigates_away(&self) -> bool {
        self.status == OutcomeStatus::Success && self.redirect_url.is_some()
    }
}

// ---------------------------------------------------------------------------
// Guest challenge & preferences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeStage {
    CollectEmail,
    CollectCode,
}

/// Email + code verification sub-flow for unauthenticated actors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestChallenge {
    pub stage: ChallengeStage,
    pub email: Option<String>,
}

impl GuestChallenge {
    pub fn new() -> Self {
        Self { stage: ChallengeStage::CollectEmail, email: None }
    }
}

impl Default for GuestChallenge {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-moon",
            Theme::Light => "fas fa-sun",
        }
    }
}
