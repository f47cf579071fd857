//! Rendering helpers shared by the screens.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::hub::HubContext;

/// Splits the screen into header, body and footer.
pub fn frame_layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Title bar with the connected address on the right.
pub fn draw_header(frame: &mut Frame, area: Rect, title: &str, ctx: &HubContext) {
    let account = ctx
        .wallet
        .account()
        .as_ref()
        .map(|a| a.address().truncated())
        .unwrap_or_else(|| "not connected".to_string());
    let header = Paragraph::new(Line::from(title.to_string()))
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" APTOS ARENA ")
                .title_bottom(Line::from(format!(" {} ", account)).right_aligned()),
        );
    frame.render_widget(header, area);
}

/// Status line, key help, and any wallet error or notice.
pub fn draw_footer(frame: &mut Frame, area: Rect, status: &str, help: &str, ctx: &HubContext) {
    let banner = match (ctx.wallet.error(), &ctx.notice) {
        (Some(err), _) => Line::styled(err.clone(), Style::default().fg(Color::Red)),
        (None, Some(notice)) => Line::styled(notice.clone(), Style::default().fg(Color::Green)),
        (None, None) => Line::from(""),
    };
    let lines = vec![
        Line::styled(status.to_string(), Style::default().fg(Color::Yellow)),
        banner,
    ];
    let footer = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title_bottom(Line::from(format!(" {} ", help)).centered())
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(footer, area);
}

/// Style for a grid cell, highlighted under the cursor.
pub fn cell_style(base: Style, selected: bool) -> Style {
    if selected {
        base.bg(Color::White).fg(Color::Black)
    } else {
        base
    }
}

/// Splits `area` into a `rows` x `cols` grid of cells `cell_width` wide.
pub fn grid(area: Rect, rows: usize, cols: usize, cell_width: u16, cell_height: u16) -> Vec<Rect> {
    let width = cell_width * cols as u16;
    let height = cell_height * rows as u16;
    let inner = center_rect(area, width, height);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(cell_height); rows])
        .split(inner);
    row_areas
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Length(cell_width); cols])
                .split(*row)
                .to_vec()
        })
        .collect()
}

/// Centers a `width` x `height` rectangle inside `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

/// Moves a cursor on a `width`-wide grid of `len` cells, clamping at edges.
pub fn move_cursor(cursor: usize, width: usize, len: usize, dx: i32, dy: i32) -> usize {
    let rows = len.div_ceil(width);
    let row = (cursor / width) as i32 + dy;
    let col = (cursor % width) as i32 + dx;
    let row = row.clamp(0, rows as i32 - 1) as usize;
    let col = col.clamp(0, width as i32 - 1) as usize;
    (row * width + col).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_cursor_clamps() {
        assert_eq!(move_cursor(0, 5, 25, -1, 0), 0);
        assert_eq!(move_cursor(0, 5, 25, 1, 1), 6);
        assert_eq!(move_cursor(24, 5, 25, 1, 1), 24);
        assert_eq!(move_cursor(4, 3, 9, 0, 1), 7);
    }
}
