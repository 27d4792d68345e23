//! The action controller: double-submit guard, request dispatch and the
//! per-surface `idle → loading → success|error → idle` state machine.

use crate::constants::{
    ATTACHMENT_PROMPT, FALLBACK_SUCCESS_MESSAGE, NETWORK_ERROR_TITLE, REDIRECT_DELAY_MS,
    REJECTED_TITLE, SERVER_ERROR_TITLE, SUCCESS_TITLE, UNEXPECTED_TITLE,
};
use crate::error::fallback_message;
use crate::messages::{Command, SurfacePatch};
use crate::models::{
    ActionKind, ActionOutcome, ActionRequest, OutcomeStatus, SurfaceId, TriggerId, UiStage,
};
use crate::reducers::{challenge, chat, reaction};
use crate::state::AppState;

/// Start `request` on behalf of `trigger`.  A trigger that is already
/// pending makes this a no-op.
pub fn perform_action(
    state: &mut AppState,
    trigger: TriggerId,
    request: ActionRequest,
    commands: &mut Vec<Command>,
) {
    if state.is_pending(&trigger) {
        debug_log!("{} ignored: trigger {} already pending", request.kind, trigger);
        return;
    }

    if let Err(files) = request.preflight() {
        debug_log!("{} blocked locally, rejected attachments: {:?}", request.kind, files);
        commands.push(Command::paint(SurfacePatch::AttachmentRejected { files }));
        commands.push(Command::paint(SurfacePatch::AttachmentLabel(ATTACHMENT_PROMPT.to_string())));
        return;
    }

    state.pending.insert(trigger.clone());
    commands.push(Command::busy(&trigger, true));

    if let Some(surface) = request.kind.result_surface() {
        let pending = ActionOutcome::pending(request.kind, request.target.clone());
        resolve_outcome(state, surface, &pending, commands);
    }

    commands.push(Command::SendRequest { trigger, request });
}

/// Apply the outcome of the request started by `trigger`.
pub fn action_resolved(
    state: &mut AppState,
    trigger: &TriggerId,
    outcome: ActionOutcome,
    commands: &mut Vec<Command>,
) {
    // A successful submission with a redirect leaves the trigger disabled:
    // the page is about to unload.
    if !outcome.navigates_away() {
        if !state.pending.remove(trigger) {
            debug_log!("outcome for {} arrived without a pending request", trigger);
        }
        commands.push(Command::busy(trigger, false));
    }

    if outcome.status == OutcomeStatus::AuthChallenge {
        if let Some(surface) = outcome.kind.result_surface() {
            if surface != SurfaceId::ChallengePanel {
                settle(state, surface, UiStage::Idle, None, None, commands);
            }
        }
        challenge::open(state, commands);
        return;
    }

    match outcome.kind {
        ActionKind::ToggleReaction => reaction::resolve(trigger, &outcome, commands),
        ActionKind::RequestOtp | ActionKind::VerifyOtp => {
            challenge::resolve(state, &outcome, commands);
        }
        ActionKind::SendChat => chat::resolve(state, &outcome, commands),
        ActionKind::SubmitReport => {
            resolve_outcome(state, SurfaceId::ReportResult, &outcome, commands);
        }
    }
}

/// Render `outcome` on `surface` and record the new stage.
pub fn resolve_outcome(
    state: &mut AppState,
    surface: SurfaceId,
    outcome: &ActionOutcome,
    commands: &mut Vec<Command>,
) {
    match outcome.status {
        OutcomeStatus::Pending => settle(state, surface, UiStage::Loading, None, None, commands),
        OutcomeStatus::Success => {
            let message = outcome.message.as_deref().unwrap_or(FALLBACK_SUCCESS_MESSAGE);
            settle(state, surface, UiStage::Success, Some(SUCCESS_TITLE), Some(message), commands);

            // Navigate only after the success view has been painted.
            if let Some(url) = &outcome.redirect_url {
                commands.push(Command::NavigateAfter {
                    url: url.clone(),
                    delay_ms: REDIRECT_DELAY_MS,
                });
            }
        }
        // Not a stage: the guest challenge tracks it.
        OutcomeStatus::AuthChallenge => {}
        status => {
            let message = outcome.message.as_deref().unwrap_or_else(|| fallback_message(status));
            settle(state, surface, UiStage::Error, Some(error_title(status)), Some(message), commands);
        }
    }
}

/// Return a settled surface to idle.  A loading surface stays put.
pub fn dismiss(state: &mut AppState, surface: SurfaceId, commands: &mut Vec<Command>) {
    match state.stage(surface) {
        UiStage::Success | UiStage::Error => {
            settle(state, surface, UiStage::Idle, None, None, commands);
        }
        UiStage::Loading | UiStage::Idle => {}
    }
}

/// Record `stage` for `surface` and paint it.
pub(crate) fn settle(
    state: &mut AppState,
    surface: SurfaceId,
    stage: UiStage,
    title: Option<&str>,
    message: Option<&str>,
    commands: &mut Vec<Command>,
) {
    if stage == UiStage::Idle {
        state.stages.remove(&surface);
    } else {
        state.stages.insert(surface, stage);
    }
    commands.push(Command::stage(surface, stage, title, message));
}

fn error_title(status: OutcomeStatus) -> &'static str {
    match status {
        OutcomeStatus::Rejected => REJECTED_TITLE,
        OutcomeStatus::ServerError => SERVER_ERROR_TITLE,
        OutcomeStatus::NetworkError => NETWORK_ERROR_TITLE,
        _ => UNEXPECTED_TITLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FALLBACK_NETWORK_MESSAGE;
    use crate::models::ReportDraft;

    fn report() -> ActionRequest {
        ActionRequest::submit_report(ReportDraft {
            report_type: "complaint".into(),
            category: "facility".into(),
            title: "Broken AC".into(),
            description: "Room 101 is too hot".into(),
            attachment: None,
        })
    }

    fn outcome(status: OutcomeStatus, message: Option<&str>) -> ActionOutcome {
        ActionOutcome {
            status,
            message: message.map(str::to_string),
            ..ActionOutcome::pending(ActionKind::SubmitReport, None)
        }
    }

    #[test]
    fn perform_marks_trigger_busy_then_sends() {
        let mut state = AppState::new();
        let trigger = TriggerId::new("report-submit");
        let mut cmds = Vec::new();

        perform_action(&mut state, trigger.clone(), report(), &mut cmds);

        assert!(state.is_pending(&trigger));
        assert_eq!(state.stage(SurfaceId::ReportResult), UiStage::Loading);
        assert_eq!(cmds.len(), 3);
        assert_eq!(
            cmds[0].as_patch(),
            Some(&SurfacePatch::TriggerBusy { trigger: trigger.clone(), busy: true })
        );
        assert!(matches!(
            cmds[1].as_patch(),
            Some(SurfacePatch::Stage { stage: UiStage::Loading, .. })
        ));
        assert!(matches!(&cmds[2], Command::SendRequest { trigger: t, .. } if *t == trigger));
    }

    #[test]
    fn network_error_uses_fallback_copy() {
        let mut state = AppState::new();
        let mut cmds = Vec::new();
        resolve_outcome(
            &mut state,
            SurfaceId::ReportResult,
            &outcome(OutcomeStatus::NetworkError, None),
            &mut cmds,
        );
        assert_eq!(
            cmds[0].as_patch(),
            Some(&SurfacePatch::Stage {
                surface: SurfaceId::ReportResult,
                stage: UiStage::Error,
                title: Some(NETWORK_ERROR_TITLE.into()),
                message: Some(FALLBACK_NETWORK_MESSAGE.into()),
            })
        );
    }

    #[test]
    fn loading_surface_cannot_be_dismissed() {
        let mut state = AppState::new();
        let mut cmds = Vec::new();
        state.stages.insert(SurfaceId::ReportResult, UiStage::Loading);

        dismiss(&mut state, SurfaceId::ReportResult, &mut cmds);
        assert!(cmds.is_empty());

        state.stages.insert(SurfaceId::ReportResult, UiStage::Error);
        dismiss(&mut state, SurfaceId::ReportResult, &mut cmds);
        assert_eq!(state.stage(SurfaceId::ReportResult), UiStage::Idle);
        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn unexpected_status_is_distinct_from_rejection() {
        let mut state = AppState::new();
        let mut cmds = Vec::new();
        resolve_outcome(
            &mut state,
            SurfaceId::ReportResult,
            &outcome(OutcomeStatus::Unexpected, None),
            &mut cmds,
        );
        assert!(matches!(
            cmds[0].as_patch(),
            Some(SurfacePatch::Stage { title: Some(t), .. }) if t == UNEXPECTED_TITLE
        ));
    }
}
