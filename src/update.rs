// src/update.rs
//
// Root reducer.  Pure: no DOM, no network – everything observable leaves as
// a `Command`.  Each domain lives in its own module under `reducers/`.
//
use crate::messages::{Command, Message};
use crate::reducers::{action, challenge, chat, preferences};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    match msg {
        Message::PerformAction { trigger, request } => {
            action::perform_action(state, trigger, request, &mut commands);
        }
        Message::ActionResolved { trigger, outcome } => {
            action::action_resolved(state, &trigger, outcome, &mut commands);
        }
        Message::ResultDismissed(surface) => {
            action::dismiss(state, surface, &mut commands);
        }

        Message::ChallengeRequested => challenge::open(state, &mut commands),
        Message::ChallengeEmailSubmitted { trigger, email } => {
            challenge::submit_email(state, trigger, email, &mut commands);
        }
        Message::ChallengeCodeSubmitted { trigger, code } => {
            challenge::submit_code(state, trigger, code, &mut commands);
        }
        Message::ChallengeBack => challenge::back(state, &mut commands),
        Message::ChallengeDismissed => challenge::dismiss(state, &mut commands),

        Message::AttachmentSelected(files) => {
            preferences::attachment_selected(&files, &mut commands);
        }

        Message::ChatSubmitted { trigger, text } => {
            chat::submit(state, trigger, text, &mut commands);
        }
        Message::WelcomeHintDismissed => preferences::dismiss_welcome_hint(state, &mut commands),

        Message::PreferencesLoaded { theme, welcome_hint_seen } => {
            preferences::loaded(state, theme, welcome_hint_seen, &mut commands);
        }
        Message::ToggleTheme => preferences::toggle_theme(state, &mut commands),
    }

    commands
}
