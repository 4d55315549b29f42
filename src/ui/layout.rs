use ratatui::layout::{Constraint, Direction, Layout, Rect};
use std::ops::Range;

/// Rows taken by one match card, borders included.
pub const CARD_HEIGHT: u16 = 5;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Number of whole cards that fit into `body`.
pub fn card_capacity(body: Rect) -> usize {
    (body.height / CARD_HEIGHT) as usize
}

/// Indices of the cards to draw so that `selected` stays on screen.
///
/// Scrolls only as far as needed: the selected card ends up on the last
/// visible row once it would otherwise fall off the bottom.
pub fn visible_window(len: usize, selected: Option<usize>, capacity: usize) -> Range<usize> {
    if capacity == 0 || len == 0 {
        return 0..0;
    }
    let selected = selected.unwrap_or(0).min(len - 1);
    let first = (selected + 1).saturating_sub(capacity);
    first..(first + capacity).min(len)
}

/// Rect of the `slot`-th card inside `body`.
pub fn card_rect(body: Rect, slot: usize) -> Rect {
    let offset = (slot as u16).saturating_mul(CARD_HEIGHT);
    Rect {
        x: body.x,
        y: body.y.saturating_add(offset),
        width: body.width,
        height: CARD_HEIGHT.min(body.height.saturating_sub(offset)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_split_header_body_footer() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body, Rect::new(0, 3, 80, 18));
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn tiny_area_does_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn window_starts_at_top_when_selection_fits() {
        assert_eq!(visible_window(10, Some(2), 3), 0..3);
        assert_eq!(visible_window(2, Some(1), 3), 0..2);
    }

    #[test]
    fn window_follows_selection_past_the_bottom() {
        assert_eq!(visible_window(10, Some(5), 3), 3..6);
        assert_eq!(visible_window(10, Some(9), 3), 7..10);
    }

    #[test]
    fn window_handles_empty_inputs() {
        assert_eq!(visible_window(0, None, 3), 0..0);
        assert_eq!(visible_window(4, None, 0), 0..0);
        assert_eq!(visible_window(4, None, 2), 0..2);
    }

    #[test]
    fn card_rects_stack_vertically() {
        let body = Rect::new(0, 3, 40, 12);
        assert_eq!(card_rect(body, 0), Rect::new(0, 3, 40, 5));
        assert_eq!(card_rect(body, 1), Rect::new(0, 8, 40, 5));
        assert_eq!(card_capacity(body), 2);
    }
}
