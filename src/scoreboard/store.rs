//! State holder for the scoreboard.

use std::fmt;

use tracing::debug;

use crate::mvi::Reducer;

use super::action::ScoreboardAction;
use super::reducer::ScoreboardReducer;
use super::state::ScoreboardState;

type Listener = Box<dyn FnMut(&ScoreboardState)>;

/// Owns the current snapshot. The only way to change it is [`dispatch`].
///
/// Listeners registered with [`subscribe`] see the full new snapshot after
/// every dispatch, in registration order.
///
/// [`dispatch`]: ScoreboardStore::dispatch
/// [`subscribe`]: ScoreboardStore::subscribe
pub struct ScoreboardStore {
    state: ScoreboardState,
    revision: u64,
    listeners: Vec<Listener>,
}

impl Default for ScoreboardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ScoreboardStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreboardStore")
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ScoreboardStore {
    pub fn new() -> Self {
        Self::with_state(ScoreboardState::initial())
    }

    pub fn with_state(state: ScoreboardState) -> Self {
        Self {
            state,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &ScoreboardState {
        &self.state
    }

    /// Number of actions dispatched so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ScoreboardState) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Replace the snapshot with `reduce(current, action)` and notify listeners.
    pub fn dispatch(&mut self, action: ScoreboardAction) {
        let previous = std::mem::take(&mut self.state);
        self.state = ScoreboardReducer::reduce(previous, action);
        self.revision += 1;
        debug!(
            kind = action.kind(),
            ?action,
            revision = self.revision,
            matches = self.state.len(),
            next_id = self.state.next_id(),
            "dispatched"
        );

        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }

    /// Consume the store, returning the final snapshot.
    pub fn into_state(self) -> ScoreboardState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn new_store_holds_initial_state() {
        let store = ScoreboardStore::new();
        assert_eq!(store.state(), &ScoreboardState::initial());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn dispatch_replaces_state_and_bumps_revision() {
        let mut store = ScoreboardStore::new();
        store.dispatch(ScoreboardAction::add_match());
        assert_eq!(store.state().len(), 2);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn listeners_see_every_snapshot() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = ScoreboardStore::new();
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.len()));

        store.dispatch(ScoreboardAction::add_match());
        store.dispatch(ScoreboardAction::add_match());
        store.dispatch(ScoreboardAction::delete_match(1));
        store.dispatch(ScoreboardAction::Unrecognized);

        assert_eq!(*seen.borrow(), vec![2, 3, 2, 2]);
    }
}
