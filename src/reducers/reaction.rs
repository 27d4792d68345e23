//! Reaction toggles: counter updates and the trigger's active mark.

use crate::constants::TOTAL_COUNTER_KEY;
use crate::error::fallback_message;
use crate::messages::{Command, SurfacePatch};
use crate::models::{ActionOutcome, OutcomeStatus, ReactionAction, ReactionUpdate, TriggerId};

pub fn resolve(trigger: &TriggerId, outcome: &ActionOutcome, commands: &mut Vec<Command>) {
    match outcome.status {
        OutcomeStatus::Success => {
            match (outcome.target.as_deref(), outcome.reaction.as_ref()) {
                (Some(target), Some(update)) => toggle_local_counter(trigger, target, update, commands),
                _ => debug_log!("reaction outcome for {} carried no update", trigger),
            }
        }
        status if status.is_failure() => {
            let message = outcome.message.as_deref().unwrap_or_else(|| fallback_message(status));
            commands.push(Command::toast(false, message));
        }
        _ => {}
    }
}

/// Paint whatever counters the response carried for `target` and flip the
/// trigger's active state.  Counter names are not assumed.
pub fn toggle_local_counter(
    trigger: &TriggerId,
    target: &str,
    update: &ReactionUpdate,
    commands: &mut Vec<Command>,
) {
    for (counter, value) in &update.counts {
        commands.push(Command::paint(SurfacePatch::Counter {
            counter: counter.clone(),
            target: target.to_string(),
            value: *value,
        }));
    }

    if let Some(total) = update.total {
        commands.push(Command::paint(SurfacePatch::Counter {
            counter: TOTAL_COUNTER_KEY.to_string(),
            target: target.to_string(),
            value: total,
        }));
    }

    match update.action {
        Some(ReactionAction::Created) | Some(ReactionAction::Updated) => {
            // One reaction per user and report: siblings lose their mark.
            commands.push(Command::paint(SurfacePatch::ClearActiveReactions {
                target: target.to_string(),
            }));
            commands.push(Command::paint(SurfacePatch::TriggerActive {
                trigger: trigger.clone(),
                active: true,
            }));
        }
        Some(ReactionAction::Removed) => {
            commands.push(Command::paint(SurfacePatch::TriggerActive {
                trigger: trigger.clone(),
                active: false,
            }));
        }
        Some(ReactionAction::Unknown) | None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn patches(cmds: &[Command]) -> Vec<SurfacePatch> {
        cmds.iter().filter_map(|c| c.as_patch().cloned()).collect()
    }

    #[test]
    fn iterates_whatever_counters_arrive() {
        let trigger = TriggerId::reaction("r1", "shock");
        let update = ReactionUpdate {
            action: None,
            counts: BTreeMap::from([("brand_new".to_string(), 7), ("shock".to_string(), 1)]),
            total: None,
        };
        let mut cmds = Vec::new();
        toggle_local_counter(&trigger, "r1", &update, &mut cmds);

        assert_eq!(
            patches(&cmds),
            vec![
                SurfacePatch::Counter { counter: "brand_new".into(), target: "r1".into(), value: 7 },
                SurfacePatch::Counter { counter: "shock".into(), target: "r1".into(), value: 1 },
            ]
        );
    }

    #[test]
    fn missing_counts_is_a_no_op() {
        let trigger = TriggerId::reaction("r1", "agree");
        let mut cmds = Vec::new();
        toggle_local_counter(&trigger, "r1", &ReactionUpdate::default(), &mut cmds);
        assert!(cmds.is_empty());
    }

    #[test]
    fn failure_is_toasted() {
        let trigger = TriggerId::reaction("r1", "agree");
        let outcome = ActionOutcome {
            status: OutcomeStatus::ServerError,
            message: Some("Unable to process reaction".into()),
            ..ActionOutcome::pending(crate::models::ActionKind::ToggleReaction, Some("r1".into()))
        };
        let mut cmds = Vec::new();
        resolve(&trigger, &outcome, &mut cmds);
        assert_eq!(
            patches(&cmds),
            vec![SurfacePatch::Toast { success: false, message: "Unable to process reaction".into() }]
        );
    }
}
