use crate::scoreboard::{MatchId, ScoreboardAction};
use crate::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Increment,
    Decrement,
}

impl FormKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Increment => "Increment",
            Self::Decrement => "Decrement",
        }
    }

    /// Build the action this form submits. `value` is already normalised.
    pub fn action(self, match_id: MatchId, value: u64) -> ScoreboardAction {
        match self {
            Self::Increment => ScoreboardAction::increment(match_id, value),
            Self::Decrement => ScoreboardAction::decrement(match_id, value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Hidden,
    Editing {
        match_id: MatchId,
        kind: FormKind,
        input: String,
    },
}

impl UiState for FormState {}

impl FormState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
