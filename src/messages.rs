// src/messages.rs
//
// Events the UI can produce, and the side effects the reducer asks for.
//
use crate::models::{
    ActionOutcome, ActionRequest, Attachment, GuestChallenge, SurfaceId, Theme, TriggerId,
    UiStage,
};

#[derive(Debug, Clone)]
pub enum Message {
    // Action controller
    PerformAction {
        trigger: TriggerId,
        request: ActionRequest,
    },
    ActionResolved {
        trigger: TriggerId,
        outcome: ActionOutcome,
    },
    ResultDismissed(SurfaceId),

    // Guest challenge
    ChallengeRequested,                  // explicit "verify your account" link
    ChallengeEmailSubmitted {
        trigger: TriggerId,
        email: String,
    },
    ChallengeCodeSubmitted {
        trigger: TriggerId,
        code: String,
    },
    ChallengeBack,                       // return to the email stage, keep the email
    ChallengeDismissed,

    // Report form
    AttachmentSelected(Vec<Attachment>),

    // Chat widget
    ChatSubmitted {
        trigger: TriggerId,
        text: String,
    },
    WelcomeHintDismissed,

    // Preferences
    PreferencesLoaded {
        theme: Option<Theme>,
        welcome_hint_seen: bool,
    },
    ToggleTheme,
}

/// Who wrote a chat bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAuthor {
    User,
    Bot,
}

/// One write to the Presentation Surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfacePatch {
    TriggerBusy {
        trigger: TriggerId,
        busy: bool,
    },
    TriggerActive {
        trigger: TriggerId,
        active: bool,
    },
    /// Drop the `active` mark from every reaction button of a target.
    ClearActiveReactions {
        target: String,
    },
    Stage {
        surface: SurfaceId,
        stage: UiStage,
        title: Option<String>,
        message: Option<String>,
    },
    Counter {
        counter: String,
        target: String,
        value: u64,
    },
    AttachmentRejected {
        files: Vec<String>,
    },
    AttachmentLabel(String),
    Challenge(Option<GuestChallenge>),
    ChatBubble {
        author: ChatAuthor,
        text: String,
    },
    /// The typed message was accepted for sending.
    ChatInputCleared,
    WelcomeHint(bool),
    Theme(Theme),
    Toast {
        success: bool,
        message: String,
    },
}

#[derive(Debug, Clone)]
pub enum Command {
    /// Issue the request and feed the outcome back as `ActionResolved`.
    SendRequest {
        trigger: TriggerId,
        request: ActionRequest,
    },
    Paint(SurfacePatch),
    NavigateAfter {
        url: String,
        delay_ms: u32,
    },
    /// Reload the page (re-synchronise authenticated state) after a delay.
    Reload {
        delay_ms: u32,
    },
    Persist {
        key: &'static str,
        value: String,
    },
}

impl Command {
    /// Helper to create a Paint command
    pub fn paint(patch: SurfacePatch) -> Self {
        Command::Paint(patch)
    }

    pub fn stage(
        surface: SurfaceId,
        stage: UiStage,
        title: Option<&str>,
        message: Option<&str>,
    ) -> Self {
        Command::Paint(SurfacePatch::Stage {
            surface,
            stage,
            title: title.map(str::to_string),
            message: message.map(str::to_string),
        })
    }

    pub fn busy(trigger: &TriggerId, busy: bool) -> Self {
        Command::Paint(SurfacePatch::TriggerBusy { trigger: trigger.clone(), busy })
    }

    pub fn toast(success: bool, message: impl Into<String>) -> Self {
        Command::Paint(SurfacePatch::Toast { success, message: message.into() })
    }

    /// The patch carried by a `Paint`, if any.  Handy in tests.
    pub fn as_patch(&self) -> Option<&SurfacePatch> {
        match self {
            Command::Paint(patch) => Some(patch),
            _ => None,
        }
    }
}
