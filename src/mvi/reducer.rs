//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
///
/// `reduce` consumes the previous snapshot and returns the next one. It must
/// be pure and total: no I/O, no panics, no error values. Intents that do not
/// apply to the current state return it unchanged.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
