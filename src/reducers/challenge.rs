//! Guest challenge: collect an email, request a one-time code, verify it.
//!
//! The challenge is opened by an `AuthChallenge` outcome (or the explicit
//! verify link) and lives until verification succeeds or the user closes the
//! modal.  The interrupted action is not replayed; after verification the page
//! reloads and the user retries.

use crate::constants::{
    CODE_REQUIRED_MESSAGE, EMAIL_REQUIRED_MESSAGE, OTP_SENT_FALLBACK, OTP_VERIFIED_FALLBACK,
    REDIRECT_DELAY_MS, REJECTED_TITLE,
};
use crate::messages::{Command, SurfacePatch};
use crate::models::{
    ActionKind, ActionOutcome, ActionRequest, ChallengeStage, GuestChallenge, OutcomeStatus,
    SurfaceId, TriggerId, UiStage,
};
use crate::reducers::action::{self, settle};
use crate::state::AppState;

/// Open the challenge, or re-show it in its current stage.
pub fn open(state: &mut AppState, commands: &mut Vec<Command>) {
    let challenge = state.challenge.get_or_insert_with(GuestChallenge::new).clone();
    settle(state, SurfaceId::ChallengePanel, UiStage::Idle, None, None, commands);
    commands.push(Command::paint(SurfacePatch::Challenge(Some(challenge))));
}

pub fn submit_email(
    state: &mut AppState,
    trigger: TriggerId,
    email: String,
    commands: &mut Vec<Command>,
) {
    // A pending request already owns the stored email.
    if state.is_pending(&trigger) {
        debug_log!("email submitted while a code request is pending, ignoring");
        return;
    }

    let email = email.trim().to_string();
    if email.is_empty() {
        local_error(state, EMAIL_REQUIRED_MESSAGE, commands);
        return;
    }

    state.challenge.get_or_insert_with(GuestChallenge::new).email = Some(email.clone());
    action::perform_action(state, trigger, ActionRequest::request_otp(email), commands);
}

pub fn submit_code(
    state: &mut AppState,
    trigger: TriggerId,
    code: String,
    commands: &mut Vec<Command>,
) {
    let email = match &state.challenge {
        Some(GuestChallenge { stage: ChallengeStage::CollectCode, email: Some(email) }) => {
            email.clone()
        }
        _ => {
            debug_log!("code submitted outside the code stage, ignoring");
            return;
        }
    };

    let code = code.trim();
    if code.is_empty() {
        local_error(state, CODE_REQUIRED_MESSAGE, commands);
        return;
    }

    action::perform_action(state, trigger, ActionRequest::verify_otp(email, code), commands);
}

/// Apply a request-code / verify-code outcome.
pub fn resolve(state: &mut AppState, outcome: &ActionOutcome, commands: &mut Vec<Command>) {
    match (outcome.kind, outcome.status) {
        (ActionKind::RequestOtp, OutcomeStatus::Success) => {
            if let Some(challenge) = state.challenge.as_mut() {
                challenge.stage = ChallengeStage::CollectCode;
            }

            let mut sent = outcome.clone();
            sent.message.get_or_insert_with(|| OTP_SENT_FALLBACK.to_string());
            action::resolve_outcome(state, SurfaceId::ChallengePanel, &sent, commands);
            commands.push(Command::paint(SurfacePatch::Challenge(state.challenge.clone())));
        }
        (ActionKind::VerifyOtp, OutcomeStatus::Success) => {
            state.challenge = None;
            settle(state, SurfaceId::ChallengePanel, UiStage::Idle, None, None, commands);
            commands.push(Command::paint(SurfacePatch::Challenge(None)));

            let message = outcome.message.as_deref().unwrap_or(OTP_VERIFIED_FALLBACK);
            commands.push(Command::toast(true, message));
            // Re-synchronise the authenticated state.
            commands.push(Command::Reload { delay_ms: REDIRECT_DELAY_MS });
        }
        // Failures keep the stage and the entered email so the user can retry.
        _ => action::resolve_outcome(state, SurfaceId::ChallengePanel, outcome, commands),
    }
}

/// Back from the code stage to the email stage, keeping the email.
pub fn back(state: &mut AppState, commands: &mut Vec<Command>) {
    let challenge = match state.challenge.as_mut() {
        Some(challenge) => {
            challenge.stage = ChallengeStage::CollectEmail;
            challenge.clone()
        }
        None => return,
    };
    settle(state, SurfaceId::ChallengePanel, UiStage::Idle, None, None, commands);
    commands.push(Command::paint(SurfacePatch::Challenge(Some(challenge))));
}

pub fn dismiss(state: &mut AppState, commands: &mut Vec<Command>) {
    if state.challenge.take().is_none() {
        return;
    }
    settle(state, SurfaceId::ChallengePanel, UiStage::Idle, None, None, commands);
    commands.push(Command::paint(SurfacePatch::Challenge(None)));
}

fn local_error(state: &mut AppState, message: &str, commands: &mut Vec<Command>) {
    settle(
        state,
        SurfaceId::ChallengePanel,
        UiStage::Error,
        Some(REJECTED_TITLE),
        Some(message),
        commands,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(kind: ActionKind, status: OutcomeStatus, message: Option<&str>) -> ActionOutcome {
        ActionOutcome {
            status,
            message: message.map(str::to_string),
            ..ActionOutcome::pending(kind, None)
        }
    }

    #[test]
    fn blank_email_never_reaches_the_network() {
        let mut state = AppState::new();
        let mut cmds = Vec::new();
        open(&mut state, &mut cmds);
        cmds.clear();

        submit_email(&mut state, TriggerId::new("otp-email"), "   ".into(), &mut cmds);

        assert!(!cmds.iter().any(|c| matches!(c, Command::SendRequest { .. })));
        assert_eq!(state.stage(SurfaceId::ChallengePanel), UiStage::Error);
    }

    #[test]
    fn code_sent_moves_to_code_stage() {
        let mut state = AppState::new();
        let mut cmds = Vec::new();
        submit_email(&mut state, TriggerId::new("otp-email"), "a@b.id".into(), &mut cmds);
        cmds.clear();

        resolve(&mut state, &outcome(ActionKind::RequestOtp, OutcomeStatus::Success, None), &mut cmds);

        let challenge = state.challenge.clone().expect("challenge stays open");
        assert_eq!(challenge.stage, ChallengeStage::CollectCode);
        assert_eq!(challenge.email.as_deref(), Some("a@b.id"));
        assert!(cmds.iter().any(|c| matches!(
            c.as_patch(),
            Some(SurfacePatch::Stage { message: Some(m), .. }) if m == OTP_SENT_FALLBACK
        )));
    }

    #[test]
    fn failed_code_request_keeps_email_for_retry() {
        let mut state = AppState::new();
        let mut cmds = Vec::new();
        submit_email(&mut state, TriggerId::new("otp-email"), "a@b.id".into(), &mut cmds);

        resolve(
            &mut state,
            &outcome(ActionKind::RequestOtp, OutcomeStatus::Rejected, Some("Gagal mengirim email")),
            &mut cmds,
        );

        let challenge = state.challenge.clone().expect("challenge stays open");
        assert_eq!(challenge.stage, ChallengeStage::CollectEmail);
        assert_eq!(challenge.email.as_deref(), Some("a@b.id"));
        assert_eq!(state.stage(SurfaceId::ChallengePanel), UiStage::Error);
    }

    #[test]
    fn email_edit_while_code_request_pending_is_ignored() {
        let mut state = AppState::new();
        let trigger = TriggerId::new("otp-email");
        let mut cmds = Vec::new();
        submit_email(&mut state, trigger.clone(), "a@x.id".into(), &mut cmds);
        cmds.clear();

        submit_email(&mut state, trigger, "b@x.id".into(), &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(state.challenge.and_then(|c| c.email).as_deref(), Some("a@x.id"));
    }

    #[test]
    fn code_is_ignored_before_one_was_sent() {
        let mut state = AppState::new();
        let mut cmds = Vec::new();
        open(&mut state, &mut cmds);
        cmds.clear();

        submit_code(&mut state, TriggerId::new("otp-code"), "123456".into(), &mut cmds);
        assert!(cmds.is_empty());
    }

    #[test]
    fn back_keeps_email() {
        let mut state = AppState::new();
        state.challenge = Some(GuestChallenge {
            stage: ChallengeStage::CollectCode,
            email: Some("a@b.id".into()),
        });
        let mut cmds = Vec::new();
        back(&mut state, &mut cmds);
        assert_eq!(
            state.challenge,
            Some(GuestChallenge { stage: ChallengeStage::CollectEmail, email: Some("a@b.id".into()) })
        );
    }

    #[test]
    fn dismiss_destroys_challenge() {
        let mut state = AppState::new();
        let mut cmds = Vec::new();
        open(&mut state, &mut cmds);
        dismiss(&mut state, &mut cmds);
        assert!(state.challenge.is_none());
        assert_eq!(cmds.last().and_then(Command::as_patch), Some(&SurfacePatch::Challenge(None)));
    }
}
