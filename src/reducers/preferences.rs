//! Theme, welcome hint and attachment-selection feedback.

use crate::attachment;
use crate::constants::{ATTACHMENT_PROMPT, THEME_STORAGE_KEY, WELCOME_HINT_STORAGE_KEY};
use crate::messages::{Command, SurfacePatch};
use crate::models::{Attachment, Theme};
use crate::state::AppState;

pub fn loaded(
    state: &mut AppState,
    theme: Option<Theme>,
    welcome_hint_seen: bool,
    commands: &mut Vec<Command>,
) {
    state.theme = theme.unwrap_or_default();
    state.welcome_hint_seen = welcome_hint_seen;
    commands.push(Command::paint(SurfacePatch::Theme(state.theme)));
    commands.push(Command::paint(SurfacePatch::WelcomeHint(!welcome_hint_seen)));
}

pub fn toggle_theme(state: &mut AppState, commands: &mut Vec<Command>) {
    state.theme = state.theme.toggled();
    commands.push(Command::paint(SurfacePatch::Theme(state.theme)));
    commands.push(Command::Persist {
        key: THEME_STORAGE_KEY,
        value: state.theme.as_str().to_string(),
    });
}

pub fn dismiss_welcome_hint(state: &mut AppState, commands: &mut Vec<Command>) {
    if state.welcome_hint_seen {
        return;
    }
    state.welcome_hint_seen = true;
    commands.push(Command::paint(SurfacePatch::WelcomeHint(false)));
    commands.push(Command::Persist { key: WELCOME_HINT_STORAGE_KEY, value: "true".to_string() });
}

/// Validate a new file selection.  Rejection lists the offending names and
/// clears the input.
pub fn attachment_selected(files: &[Attachment], commands: &mut Vec<Command>) {
    let names: Vec<String> = files.iter().map(|f| f.name.clone()).collect();

    match attachment::validate_names(names.iter().map(String::as_str)) {
        Ok(()) => {
            commands.push(Command::paint(SurfacePatch::AttachmentLabel(
                attachment::selection_label(&names),
            )));
        }
        Err(invalid) => {
            commands.push(Command::paint(SurfacePatch::AttachmentRejected { files: invalid }));
            commands.push(Command::paint(SurfacePatch::AttachmentLabel(ATTACHMENT_PROMPT.to_string())));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_defaults_to_dark_and_persists_on_toggle() {
        let mut state = AppState::new();
        let mut cmds = Vec::new();
        loaded(&mut state, None, false, &mut cmds);
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(cmds[1].as_patch(), Some(&SurfacePatch::WelcomeHint(true)));

        cmds.clear();
        toggle_theme(&mut state, &mut cmds);
        assert_eq!(state.theme, Theme::Light);
        assert!(matches!(
            &cmds[1],
            Command::Persist { key, value } if *key == THEME_STORAGE_KEY && value == "light"
        ));
    }

    #[test]
    fn welcome_hint_is_persisted_once() {
        let mut state = AppState::new();
        let mut cmds = Vec::new();
        dismiss_welcome_hint(&mut state, &mut cmds);
        dismiss_welcome_hint(&mut state, &mut cmds);
        assert_eq!(cmds.iter().filter(|c| matches!(c, Command::Persist { .. })).count(), 1);
    }

    #[test]
    fn accepted_selection_updates_label() {
        let mut cmds = Vec::new();
        attachment_selected(&[Attachment::named("photo.jpg")], &mut cmds);
        assert_eq!(
            cmds.iter().filter_map(Command::as_patch).cloned().collect::<Vec<_>>(),
            vec![SurfacePatch::AttachmentLabel("photo.jpg".into())]
        );
    }
}
