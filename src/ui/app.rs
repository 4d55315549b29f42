use crate::config::UiConfig;
use crate::mvi::Reducer;
use crate::scoreboard::{Match, ScoreboardAction, ScoreboardState, ScoreboardStore};
use crate::ui::form::{FormIntent, FormKind, FormReducer, FormState};
use crate::ui::input::parse_amount;
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Terminal front-end state around the scoreboard store.
///
/// The store is the single source of truth for matches; the app only adds
/// what the view needs on top of it (selected card, entry form, quit flag).
///
/// A store listener raises the redraw flag after every dispatch; UI-local
/// changes (selection, form edits) raise it directly.
pub struct App {
    should_quit: bool,
    title: String,
    store: ScoreboardStore,
    /// Index into `store.state().matches()`; `None` only when the list is empty.
    selected: Option<usize>,
    /// Score entry popup (MVI pattern).
    form: FormState,
    redraw: Rc<Cell<bool>>,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        Self::with_store(config, ScoreboardStore::new())
    }

    pub fn with_store(config: &UiConfig, mut store: ScoreboardStore) -> Self {
        let selected = if store.state().is_empty() { None } else { Some(0) };
        // First frame is always drawn
        let redraw = Rc::new(Cell::new(true));
        let flag = Rc::clone(&redraw);
        store.subscribe(move |_| flag.set(true));
        Self {
            should_quit: false,
            title: config.title.clone(),
            store,
            selected,
            form: FormState::default(),
            redraw,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> &ScoreboardState {
        self.store.state()
    }

    pub fn store(&self) -> &ScoreboardStore {
        &self.store
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
        self.request_redraw();
    }

    pub fn request_redraw(&self) {
        self.redraw.set(true);
    }

    /// Whether anything changed since the last call. Clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.redraw.replace(false)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_match(&self) -> Option<&Match> {
        self.selected
            .and_then(|idx| self.store.state().matches().get(idx))
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Dispatch a scoreboard action and keep the selection on a live card.
    pub fn dispatch(&mut self, action: ScoreboardAction) {
        self.store.dispatch(action);
        self.clamp_selection();
    }

    pub fn add_match(&mut self) {
        let new_id = self.state().next_id();
        self.dispatch(ScoreboardAction::add_match());
        // Follow the new card, if one was added
        if let Some(idx) = self.state().position(new_id) {
            self.selected = Some(idx);
        }
    }

    pub fn reset(&mut self) {
        self.dispatch(ScoreboardAction::reset());
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_match().map(|m| m.id) {
            self.dispatch(ScoreboardAction::delete_match(id));
        }
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.state().len();
        if len == 0 {
            self.selected = None;
            return;
        }

        let current = self.selected.unwrap_or(0).min(len - 1);
        let next = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };

        self.selected = Some(next);
        self.request_redraw();
    }

    /// Open the entry form for the selected card. No-op without a selection.
    pub fn open_form(&mut self, kind: FormKind) {
        if let Some(match_id) = self.selected_match().map(|m| m.id) {
            dispatch_mvi!(self, form, FormReducer, FormIntent::Open { match_id, kind });
            self.request_redraw();
        }
    }

    pub fn form_input(&mut self, ch: char) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::Input(ch));
        self.request_redraw();
    }

    pub fn form_backspace(&mut self) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::Backspace);
        self.request_redraw();
    }

    pub fn cancel_form(&mut self) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::Close);
        self.request_redraw();
    }

    /// Turn the typed amount into an increment/decrement and close the form.
    pub fn submit_form(&mut self) {
        let submission = match &self.form {
            FormState::Editing {
                match_id,
                kind,
                input,
            } => Some((*match_id, *kind, parse_amount(input))),
            FormState::Hidden => None,
        };
        dispatch_mvi!(self, form, FormReducer, FormIntent::Close);
        self.request_redraw();

        if let Some((match_id, kind, value)) = submission {
            debug!(match_id, kind = kind.label(), value, "form submitted");
            self.dispatch(kind.action(match_id, value));
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.state().len();
        self.selected = match (self.selected, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(idx), len) => Some(idx.min(len - 1)),
        };
    }
}
