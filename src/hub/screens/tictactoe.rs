//! Tic-tac-toe against the heuristic opponent.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, instrument};

use super::{arrow_step, back_key, is_due};
use crate::games::tictactoe::{GameSession, Mark, MoveResult, Position, SessionState, Square};
use crate::hub::widgets::{cell_style, draw_footer, draw_header, frame_layout, grid, move_cursor};
use crate::hub::{HubContext, Screen, ScreenTransition};

/// Board screen; shows the computer reply after the configured delay.
#[derive(Debug)]
pub struct TicTacToeScreen {
    session: GameSession,
    cursor: Position,
    reply_due: Option<Instant>,
}

impl TicTacToeScreen {
    /// Starts a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            cursor: Position::Center,
            reply_due: None,
        }
    }

    /// The game being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    fn status(&self) -> String {
        match self.session.state() {
            SessionState::AwaitingPlayer => "Your turn (X)".to_string(),
            SessionState::AwaitingOpponent => "Computer is thinking...".to_string(),
            SessionState::Won(_) | SessionState::Draw => {
                format!("{} Press n for a new game.", self.session.outcome())
            }
        }
    }

    fn submit(&mut self, index: usize, ctx: &HubContext) {
        if let MoveResult::Accepted(pos) = self.session.submit_player_move(index) {
            self.cursor = pos;
            if self.session.state() == SessionState::AwaitingOpponent {
                self.reply_due = Some(ctx.now + ctx.timing.opponent_delay());
            }
        }
    }

    fn draw_board(&self, frame: &mut Frame, area: Rect) {
        let cells = grid(area, 3, 3, 9, 3);
        for (pos, cell) in Position::ALL.iter().zip(cells) {
            let (symbol, base) = match self.session.board().get(*pos) {
                Square::Empty => (
                    format!("{}", pos.to_index() + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Square::Occupied(Mark::Player) => (
                    "X".to_string(),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                ),
                Square::Occupied(Mark::Opponent) => (
                    "O".to_string(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            };
            let style = cell_style(base, *pos == self.cursor && !self.session.is_over());
            let paragraph = Paragraph::new(symbol)
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(paragraph, cell);
        }
    }
}

impl Default for TicTacToeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TicTacToeScreen {
    #[instrument(skip(self, frame, ctx))]
    fn render(&self, frame: &mut Frame, ctx: &HubContext) {
        let [header, body, footer] = frame_layout(frame.area());
        draw_header(frame, header, "TIC-TAC-TOE", ctx);
        self.draw_board(frame, body);
        draw_footer(
            frame,
            footer,
            &self.status(),
            "1-9 / arrows+Enter: Move | n: New game | Esc: Back",
            ctx,
        );
    }

    #[instrument(skip(self, key, ctx))]
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut HubContext) -> ScreenTransition {
        if let Some(back) = back_key(&key) {
            return back;
        }
        if let Some((dx, dy)) = arrow_step(&key) {
            let next = move_cursor(self.cursor.to_index(), 3, 9, dx, dy);
            self.cursor = Position::from_index(next).unwrap_or(self.cursor);
            return ScreenTransition::Stay;
        }
        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.submit(index, ctx);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(self.cursor.to_index(), ctx),
            KeyCode::Char('n') | KeyCode::Char('N') => {
                debug!("New game");
                self.session.reset();
                self.reply_due = None;
            }
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn tick(&mut self, ctx: &mut HubContext) -> ScreenTransition {
        if is_due(self.reply_due, ctx.now) {
            self.reply_due = None;
            self.session.advance_opponent(&mut ctx.rng);
        }
        ScreenTransition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub::screens::test_support::{ch, context, key};

    #[test]
    fn test_reply_waits_for_delay() {
        let mut ctx = context();
        let mut screen = TicTacToeScreen::new();
        screen.handle_key(ch('1'), &mut ctx);
        screen.tick(&mut ctx);
        assert_eq!(screen.session().history().len(), 1, "reply not due yet");

        ctx.now += ctx.timing.opponent_delay();
        screen.tick(&mut ctx);
        assert_eq!(screen.session().history().len(), 2);
        // Center is the heuristic reply to a corner opening.
        assert_eq!(screen.session().board().get(Position::Center), Square::Occupied(Mark::Opponent));

        // A second tick does not move again.
        ctx.now += ctx.timing.opponent_delay();
        screen.tick(&mut ctx);
        assert_eq!(screen.session().history().len(), 2);
    }

    #[test]
    fn test_input_ignored_while_opponent_pending() {
        let mut ctx = context();
        let mut screen = TicTacToeScreen::new();
        screen.handle_key(key(KeyCode::Enter), &mut ctx);
        screen.handle_key(ch('1'), &mut ctx);
        assert_eq!(screen.session().history().len(), 1);
    }

    #[test]
    fn test_new_game_cancels_reply() {
        let mut ctx = context();
        let mut screen = TicTacToeScreen::new();
        screen.handle_key(ch('5'), &mut ctx);
        screen.handle_key(ch('n'), &mut ctx);
        ctx.now += ctx.timing.opponent_delay();
        screen.tick(&mut ctx);
        assert!(screen.session().history().is_empty());
        assert_eq!(screen.handle_key(key(KeyCode::Esc), &mut ctx), ScreenTransition::GoToGameSelect);
    }
}
