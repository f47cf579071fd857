//! Memory match table.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

use super::{arrow_step, back_key, is_due};
use crate::games::memory::{CARD_COUNT, FlipResult, GRID_WIDTH, MemoryGame, SYMBOLS};
use crate::hub::widgets::{cell_style, draw_footer, draw_header, frame_layout, grid, move_cursor};
use crate::hub::{HubContext, Screen, ScreenTransition};

/// 4x4 table of cards; mismatches turn back after the configured delay.
#[derive(Debug)]
pub struct MemoryScreen {
    game: MemoryGame,
    cursor: usize,
    conceal_at: Option<Instant>,
}

impl MemoryScreen {
    /// Deals a new table.
    #[instrument(skip(ctx))]
    pub fn new(ctx: &mut HubContext) -> Self {
        Self {
            game: MemoryGame::new(&mut ctx.rng),
            cursor: 0,
            conceal_at: None,
        }
    }

    /// The table in play.
    pub fn game(&self) -> &MemoryGame {
        &self.game
    }

    fn status(&self) -> String {
        if self.game.is_won() {
            "You found every pair! You win!".to_string()
        } else {
            format!("Matches: {}/{}", self.game.matches(), SYMBOLS.len())
        }
    }
}

impl Screen for MemoryScreen {
    #[instrument(skip(self, frame, ctx))]
    fn render(&self, frame: &mut Frame, ctx: &HubContext) {
        let [header, body, footer] = frame_layout(frame.area());
        draw_header(frame, header, "MEMORY MATCH", ctx);

        let cells = grid(body, CARD_COUNT / GRID_WIDTH, GRID_WIDTH, 8, 3);
        for ((id, card), cell) in self.game.cards().iter().enumerate().zip(cells) {
            let (label, base) = if card.matched {
                (card.glyph(), Style::default().fg(Color::Green))
            } else if card.flipped {
                (card.glyph(), Style::default().fg(Color::Yellow))
            } else {
                ("?", Style::default().fg(Color::Magenta))
            };
            let paragraph = Paragraph::new(label)
                .style(cell_style(base, id == self.cursor))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(paragraph, cell);
        }

        draw_footer(
            frame,
            footer,
            &self.status(),
            "Arrows: Move | Enter: Flip | n: New table | Esc: Back",
            ctx,
        );
    }

    #[instrument(skip(self, key, ctx))]
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut HubContext) -> ScreenTransition {
        if let Some(back) = back_key(&key) {
            return back;
        }
        if let Some((dx, dy)) = arrow_step(&key) {
            self.cursor = move_cursor(self.cursor, GRID_WIDTH, CARD_COUNT, dx, dy);
            return ScreenTransition::Stay;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.game.flip(self.cursor) == FlipResult::Mismatch {
                    self.conceal_at = Some(ctx.now + ctx.timing.memory_flip_back());
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.game.reset(&mut ctx.rng);
                self.conceal_at = None;
                self.cursor = 0;
            }
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn tick(&mut self, ctx: &mut HubContext) -> ScreenTransition {
        if is_due(self.conceal_at, ctx.now) {
            self.conceal_at = None;
            self.game.conceal_mismatch();
        }
        ScreenTransition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub::screens::test_support::{context, key};

    #[test]
    fn test_mismatch_turns_back_after_delay() {
        let mut ctx = context();
        let mut screen = MemoryScreen::new(&mut ctx);
        let first = screen.game().cards()[0].symbol;
        let other = screen
            .game()
            .cards()
            .iter()
            .position(|c| c.symbol != first)
            .expect("two symbols on the table");
        screen.handle_key(key(KeyCode::Enter), &mut ctx);
        screen.cursor = other;
        screen.handle_key(key(KeyCode::Enter), &mut ctx);
        assert!(screen.game().is_locked());

        screen.tick(&mut ctx);
        assert!(screen.game().is_locked());
        ctx.now += ctx.timing.memory_flip_back();
        screen.tick(&mut ctx);
        assert!(!screen.game().is_locked());
        assert!(!screen.game().cards()[0].face_up());
    }
}
