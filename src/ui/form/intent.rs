use crate::scoreboard::MatchId;
use crate::mvi::Intent;

use super::state::FormKind;

#[derive(Debug, Clone, Copy)]
pub enum FormIntent {
    /// Start editing an amount for `match_id`. Replaces any open form.
    Open { match_id: MatchId, kind: FormKind },
    /// Typed character. Ignored unless it can be part of a number.
    Input(char),
    Backspace,
    Close,
}

impl Intent for FormIntent {}
