//! Score entry form feature module.
//!
//! The popup that collects an increment or decrement amount for one match.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Hidden or Editing (target match, kind, typed text)
//! - `intent.rs` - Open, Input, Backspace, Close
//! - `reducer.rs` - State transitions (pure, no side effects)
//!
//! Submitting is not a form transition: the app reads the typed text, turns
//! it into a scoreboard action and then closes the form.

mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::{FormReducer, MAX_INPUT_LEN};
pub use state::{FormKind, FormState};
