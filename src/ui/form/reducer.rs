use crate::mvi::Reducer;

use super::intent::FormIntent;
use super::state::FormState;

/// Longest amount text the form accepts.
pub const MAX_INPUT_LEN: usize = 24;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Open { match_id, kind } => FormState::Editing {
                match_id,
                kind,
                input: String::new(),
            },
            FormIntent::Close => FormState::Hidden,
            FormIntent::Input(ch) => match state {
                FormState::Editing {
                    match_id,
                    kind,
                    mut input,
                } => {
                    if accepts(ch) && input.chars().count() < MAX_INPUT_LEN {
                        input.push(ch);
                    }
                    FormState::Editing {
                        match_id,
                        kind,
                        input,
                    }
                }
                other => other,
            },
            FormIntent::Backspace => match state {
                FormState::Editing {
                    match_id,
                    kind,
                    mut input,
                } => {
                    input.pop();
                    FormState::Editing {
                        match_id,
                        kind,
                        input,
                    }
                }
                other => other,
            },
        }
    }
}

fn accepts(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ' ')
}
