//! Mystery box grid.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

use super::{arrow_step, back_key};
use crate::games::mystery_box::{BOX_COUNT, BoxStatus, GRID_WIDTH, MysteryBoxGame};
use crate::hub::widgets::{cell_style, draw_footer, draw_header, frame_layout, grid, move_cursor};
use crate::hub::{HubContext, Screen, ScreenTransition};

/// 5x5 grid of boxes with a cursor.
#[derive(Debug)]
pub struct MysteryBoxScreen {
    game: MysteryBoxGame,
    cursor: usize,
}

impl MysteryBoxScreen {
    /// Deals a new grid.
    #[instrument(skip(ctx))]
    pub fn new(ctx: &mut HubContext) -> Self {
        Self {
            game: MysteryBoxGame::new(&mut ctx.rng),
            cursor: 0,
        }
    }

    /// The round in progress.
    pub fn game(&self) -> &MysteryBoxGame {
        &self.game
    }

    fn status(&self) -> String {
        match self.game.status() {
            BoxStatus::Playing => format!(
                "Safe boxes opened: {}/{}",
                self.game.safe_opened(),
                BOX_COUNT - 1
            ),
            BoxStatus::Won => "You cleared every safe box! You win!".to_string(),
            BoxStatus::Lost => "💣 Boom! You lose. Press n to play again.".to_string(),
        }
    }
}

impl Screen for MysteryBoxScreen {
    #[instrument(skip(self, frame, ctx))]
    fn render(&self, frame: &mut Frame, ctx: &HubContext) {
        let [header, body, footer] = frame_layout(frame.area());
        draw_header(frame, header, "MYSTERY BOX", ctx);

        let over = self.game.status() != BoxStatus::Playing;
        let cells = grid(body, BOX_COUNT / GRID_WIDTH, GRID_WIDTH, 7, 3);
        for (id, cell) in cells.into_iter().enumerate() {
            let (label, base) = if self.game.is_open(id) && id == self.game.bomb() {
                ("💣", Style::default().fg(Color::Red))
            } else if self.game.is_open(id) {
                ("💎", Style::default().fg(Color::Green))
            } else if over && id == self.game.bomb() {
                ("💣", Style::default().fg(Color::DarkGray))
            } else {
                ("🎁", Style::default().fg(Color::Magenta))
            };
            let block = Paragraph::new(label)
                .style(cell_style(base, id == self.cursor && !over))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(block, cell);
        }

        draw_footer(
            frame,
            footer,
            &self.status(),
            "Arrows: Move | Enter: Open | n: New grid | Esc: Back",
            ctx,
        );
    }

    #[instrument(skip(self, key, ctx))]
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut HubContext) -> ScreenTransition {
        if let Some(back) = back_key(&key) {
            return back;
        }
        if let Some((dx, dy)) = arrow_step(&key) {
            self.cursor = move_cursor(self.cursor, GRID_WIDTH, BOX_COUNT, dx, dy);
            return ScreenTransition::Stay;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.game.open(self.cursor);
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.game.reset(&mut ctx.rng);
                self.cursor = 0;
            }
            _ => {}
        }
        ScreenTransition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub::screens::test_support::{ch, context, key};

    #[test]
    fn test_enter_opens_box_under_cursor() {
        let mut ctx = context();
        let mut screen = MysteryBoxScreen::new(&mut ctx);
        screen.handle_key(key(KeyCode::Right), &mut ctx);
        screen.handle_key(key(KeyCode::Down), &mut ctx);
        screen.handle_key(key(KeyCode::Enter), &mut ctx);
        assert!(screen.game().is_open(6));
    }

    #[test]
    fn test_new_grid_resets() {
        let mut ctx = context();
        let mut screen = MysteryBoxScreen::new(&mut ctx);
        screen.handle_key(key(KeyCode::Enter), &mut ctx);
        screen.handle_key(ch('n'), &mut ctx);
        assert_eq!(screen.game().status(), BoxStatus::Playing);
        assert!(!screen.game().is_open(0));
    }
}
