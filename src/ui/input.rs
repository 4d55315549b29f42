use crate::ui::app::App;
use crate::ui::form::FormKind;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a key press into app operations.
///
/// Every scoreboard change goes through [`App::dispatch`] and friends; this
/// function never touches the store directly.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }

    if app.form().is_open() {
        match key.code {
            KeyCode::Esc => app.cancel_form(),
            KeyCode::Enter => app.submit_form(),
            KeyCode::Backspace => app.form_backspace(),
            KeyCode::Char(ch) => app.form_input(ch),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('a') => app.add_match(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('+' | '=' | 'i') => app.open_form(FormKind::Increment),
        KeyCode::Char('-' | '_' | 'x') => app.open_form(FormKind::Decrement),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        _ => {}
    }
}

/// Coerce raw form text into a non-negative amount.
///
/// - surrounding whitespace is ignored, empty text is 0
/// - integers and decimals yield their absolute value, decimals truncated
/// - anything unparseable (or NaN/infinite) is 0
/// - magnitudes beyond `u64::MAX` saturate
pub fn parse_amount(raw: &str) -> u64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }

    if let Ok(value) = trimmed.parse::<i128>() {
        return u64::try_from(value.unsigned_abs()).unwrap_or(u64::MAX);
    }

    match trimmed.parse::<f64>() {
        // `as` saturates on overflow
        Ok(value) if value.is_finite() => value.abs().trunc() as u64,
        _ => 0,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            handle_key(app, press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn parse_amount_coerces() {
        assert_eq!(parse_amount(""), 0);
        assert_eq!(parse_amount("   "), 0);
        assert_eq!(parse_amount("12"), 12);
        assert_eq!(parse_amount(" -12 "), 12);
        assert_eq!(parse_amount("+3"), 3);
        assert_eq!(parse_amount("2.9"), 2);
        assert_eq!(parse_amount("-0.5"), 0);
        assert_eq!(parse_amount("abc"), 0);
        assert_eq!(parse_amount("1-2"), 0);
        assert_eq!(parse_amount("inf"), 0);
        assert_eq!(parse_amount("NaN"), 0);
        assert_eq!(parse_amount("99999999999999999999999"), u64::MAX);
    }

    #[test]
    fn add_and_score_through_keys() {
        let mut app = App::new(&UiConfig::default());
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, press(KeyCode::Char('+')));
        type_str(&mut app, "5");
        handle_key(&mut app, press(KeyCode::Enter));

        assert_eq!(app.state().get(2).map(|m| m.total), Some(5));

        handle_key(&mut app, press(KeyCode::Char('-')));
        type_str(&mut app, "9");
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.state().get(2).map(|m| m.total), Some(0));
    }

    #[test]
    fn form_swallows_board_keys() {
        let mut app = App::new(&UiConfig::default());
        handle_key(&mut app, press(KeyCode::Char('i')));
        type_str(&mut app, "aqd");
        assert!(!app.should_quit());
        assert_eq!(app.state().len(), 1);
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.form().is_open());
        assert!(!app.should_quit());
    }

    #[test]
    fn delete_and_reset_keys() {
        let mut app = App::new(&UiConfig::default());
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, press(KeyCode::Up));
        handle_key(&mut app, press(KeyCode::Char('x')));
        type_str(&mut app, "1");
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Char('d')));
        assert_eq!(app.state().matches().len(), 1);
        assert_eq!(app.state().matches()[0].id, 2);
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert_eq!(app.state().grand_total(), 0);
    }

    #[test]
    fn ctrl_q_quits_even_with_form_open() {
        let mut app = App::new(&UiConfig::default());
        handle_key(&mut app, press(KeyCode::Char('+')));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new(&UiConfig::default());
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert_eq!(app.state().len(), 1);
    }
}
