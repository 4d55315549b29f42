//! Reducer for the scoreboard.

use crate::mvi::Reducer;

use super::action::ScoreboardAction;
use super::state::{Match, MatchId, ScoreboardState};

/// Scoreboard state transitions.
///
/// The previous snapshot is consumed and its match vector reused: only the
/// touched entry (or the appended one) is rebuilt. Actions that target a
/// missing id leave the list as it was.
pub struct ScoreboardReducer;

impl Reducer for ScoreboardReducer {
    type State = ScoreboardState;
    type Intent = ScoreboardAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let ScoreboardState {
            next_id,
            mut matches,
        } = state;

        match intent {
            ScoreboardAction::AddMatch { total } => match next_id.checked_add(1) {
                Some(following) => {
                    matches.push(Match::new(next_id, total));
                    ScoreboardState {
                        next_id: following,
                        matches,
                    }
                }
                // Id space exhausted: handing out `next_id` would leave no
                // larger id for the counter.
                None => ScoreboardState { next_id, matches },
            },

            ScoreboardAction::DeleteMatch { id } => {
                matches.retain(|m| m.id != id);
                ScoreboardState { next_id, matches }
            }

            ScoreboardAction::Increment { id, value } => {
                update_total(&mut matches, id, |total| total.saturating_add(value));
                ScoreboardState { next_id, matches }
            }

            ScoreboardAction::Decrement { id, value } => {
                // Floor at zero per operation.
                update_total(&mut matches, id, |total| total.saturating_sub(value));
                ScoreboardState { next_id, matches }
            }

            ScoreboardAction::Reset => {
                for m in &mut matches {
                    m.total = 0;
                }
                ScoreboardState { next_id, matches }
            }

            ScoreboardAction::Unrecognized => ScoreboardState { next_id, matches },
        }
    }
}

fn update_total(matches: &mut [Match], id: MatchId, f: impl FnOnce(u64) -> u64) {
    if let Some(m) = matches.iter_mut().find(|m| m.id == id) {
        m.total = f(m.total);
    }
}
