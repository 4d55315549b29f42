use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use tracing::{debug, info};

/// Run the interactive scoreboard until the user quits.
///
/// One event is handled to completion (dispatch, then redraw) before the
/// next is read. Frames are only drawn when the app reports a change.
pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let mut app = App::new(&config.ui);
    let events = EventHandler::new(tick_rate);
    info!(tick_rate_ms = config.ui.tick_rate_ms, "scoreboard started");

    loop {
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => {
                debug!(cols, rows, "terminal resized");
                app.request_redraw();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    info!(
        dispatched = app.store().revision(),
        matches = app.state().len(),
        "scoreboard stopped"
    );
    drop(guard);
    Ok(())
}
