use crate::scoreboard::Match;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::FormState;
use crate::ui::header::Header;
use crate::ui::layout::{card_capacity, card_rect, centered_rect, layout_regions, visible_window};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DELETE_HINT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
    POPUP_BORDER, TOTAL_TEXT,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Full redraw from the current snapshot.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.title()).widget(app.state()), header);
    frame.render_widget(Clear, body);
    draw_cards(frame, app, body);
    frame.render_widget(Footer::new(app.form().is_open()).widget(footer), footer);

    if let FormState::Editing {
        match_id,
        kind,
        input,
    } = app.form()
    {
        let popup = centered_rect(50, 30, area);
        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Amount: ", Style::default().fg(HEADER_TEXT)),
                Span::styled(
                    format!("{input}_"),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "  Enter: apply │ Esc: cancel",
                Style::default().fg(HEADER_SEPARATOR),
            )),
        ];
        let block = Block::default()
            .title(format!(" {} Match {} ", kind.label(), match_id))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }
}

fn draw_cards(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let matches = app.state().matches();
    if matches.is_empty() {
        let empty = Paragraph::new(Line::from("No matches. Press [a] to add one."))
            .alignment(Alignment::Center)
            .style(Style::default().fg(HEADER_SEPARATOR));
        frame.render_widget(empty, body);
        return;
    }

    let window = visible_window(matches.len(), app.selected_index(), card_capacity(body));
    for (slot, idx) in window.enumerate() {
        let selected = app.selected_index() == Some(idx);
        let area = card_rect(body, slot);
        frame.render_widget(match_card(&matches[idx], selected), area);
    }
}

/// One card: delete/increment/decrement controls and the total readout.
fn match_card(m: &Match, selected: bool) -> Paragraph<'static> {
    let (border, background) = if selected {
        (Style::default().fg(ACCENT), Style::default().bg(ACTIVE_HIGHLIGHT))
    } else {
        (Style::default().fg(GLOBAL_BORDER), Style::default())
    };
    let hint = Style::default().fg(HEADER_SEPARATOR);

    let lines = vec![
        Line::from(vec![
            Span::styled("  Total: ", Style::default().fg(HEADER_TEXT)),
            Span::styled(
                m.total.to_string(),
                Style::default().fg(TOTAL_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [+] increment  [-] decrement  ", hint),
            Span::styled("[d] delete", Style::default().fg(DELETE_HINT)),
        ]),
    ];

    Paragraph::new(lines).style(background).block(
        Block::default()
            .title(format!(" Match {} ", m.id))
            .borders(Borders::ALL)
            .border_style(border),
    )
}
