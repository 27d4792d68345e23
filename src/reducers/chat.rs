//! FAQ chat widget reducer.

use crate::messages::{ChatAuthor, Command, SurfacePatch};
use crate::models::{ActionOutcome, ActionRequest, OutcomeStatus, SurfaceId, TriggerId, UiStage};
use crate::reducers::action::{self, settle};
use crate::state::AppState;

pub fn submit(state: &mut AppState, trigger: TriggerId, text: String, commands: &mut Vec<Command>) {
    let text = text.trim();
    // Guard here too so the user bubble is not painted twice.
    if text.is_empty() || state.is_pending(&trigger) {
        return;
    }

    commands.push(Command::paint(SurfacePatch::ChatBubble {
        author: ChatAuthor::User,
        text: text.to_string(),
    }));
    commands.push(Command::paint(SurfacePatch::ChatInputCleared));
    action::perform_action(state, trigger, ActionRequest::send_chat(text), commands);
}

pub fn resolve(state: &mut AppState, outcome: &ActionOutcome, commands: &mut Vec<Command>) {
    match outcome.status {
        OutcomeStatus::Success => {
            settle(state, SurfaceId::ChatPanel, UiStage::Idle, None, None, commands);
            commands.push(Command::paint(SurfacePatch::ChatBubble {
                author: ChatAuthor::Bot,
                text: outcome.message.clone().unwrap_or_default(),
            }));
        }
        _ => action::resolve_outcome(state, SurfaceId::ChatPanel, outcome, commands),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActionKind;

    #[test]
    fn blank_messages_are_dropped() {
        let mut state = AppState::new();
        let mut cmds = Vec::new();
        submit(&mut state, TriggerId::new("chat-send"), "  \n".into(), &mut cmds);
        assert!(cmds.is_empty());
    }

    #[test]
    fn input_is_kept_while_previous_message_is_pending() {
        let mut state = AppState::new();
        let trigger = TriggerId::new("chat-send");
        let mut cmds = Vec::new();
        submit(&mut state, trigger.clone(), "Jam buka?".into(), &mut cmds);
        assert!(cmds.iter().any(|c| c.as_patch() == Some(&SurfacePatch::ChatInputCleared)));
        cmds.clear();

        submit(&mut state, trigger, "Dimana lokasinya?".into(), &mut cmds);
        assert!(cmds.is_empty());
    }

    #[test]
    fn reply_becomes_a_bot_bubble() {
        let mut state = AppState::new();
        let mut cmds = Vec::new();
        submit(&mut state, TriggerId::new("chat-send"), "Jam buka?".into(), &mut cmds);
        assert_eq!(state.stage(SurfaceId::ChatPanel), UiStage::Loading);
        cmds.clear();

        let outcome = ActionOutcome {
            status: OutcomeStatus::Success,
            message: Some("08.00 - 16.00".into()),
            ..ActionOutcome::pending(ActionKind::SendChat, None)
        };
        resolve(&mut state, &outcome, &mut cmds);

        assert_eq!(state.stage(SurfaceId::ChatPanel), UiStage::Idle);
        assert_eq!(
            cmds.last().and_then(Command::as_patch),
            Some(&SurfacePatch::ChatBubble { author: ChatAuthor::Bot, text: "08.00 - 16.00".into() })
        );
    }
}
