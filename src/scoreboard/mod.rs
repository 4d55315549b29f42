//! Scoreboard core.
//!
//! Holds the match list and the next-id counter, and applies actions through
//! a pure reducer. Nothing in here knows about terminals or files; the UI and
//! the replay script are adapters that produce [`ScoreboardAction`] values.
//!
//! - `state.rs` - `Match` and the `ScoreboardState` snapshot
//! - `action.rs` - the five action kinds (plus `Unrecognized`)
//! - `reducer.rs` - state transitions (pure, no side effects)
//! - `store.rs` - state holder with dispatch and subscriptions

mod action;
mod reducer;
mod state;
mod store;

pub use action::ScoreboardAction;
pub use reducer::ScoreboardReducer;
pub use state::{Match, MatchId, ScoreboardState, FIRST_MATCH_ID};
pub use store::ScoreboardStore;
