use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::messages::{Command, Message};
use crate::models::{GuestChallenge, SurfaceId, Theme, TriggerId, UiStage};
use crate::update::update;

// Controller state.  Mutated only by `update`, always on the UI thread.
#[derive(Debug, Default)]
pub struct AppState {
    // Triggers with a request in flight (double-submit guard)
    pub pending: HashSet<TriggerId>,
    // Stage of every result surface that has left Idle
    pub stages: HashMap<SurfaceId, UiStage>,
    // Open guest verification sub-flow, if any
    pub challenge: Option<GuestChallenge>,
    pub theme: Theme,
    pub welcome_hint_seen: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self, surface: SurfaceId) -> UiStage {
        self.stages.get(&surface).copied().unwrap_or_default()
    }

    pub fn is_pending(&self, trigger: &TriggerId) -> bool {
        self.pending.contains(trigger)
    }

    /// Run the reducer and hand back the side effects it produced.
    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update(self, msg)
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Reduce `msg` against the global state, then execute the resulting
/// commands once the borrow has been released (executors may dispatch again).
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|state| mut_borrow!(state).dispatch(msg));

    for cmd in commands {
        crate::command_executors::execute(cmd);
    }
}
