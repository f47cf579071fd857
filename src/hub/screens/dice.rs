//! Dice roll screen.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, instrument};

use super::{back_key, is_due};
use crate::games::dice::{DiceGame, FACES};
use crate::hub::widgets::{center_rect, draw_footer, draw_header, frame_layout};
use crate::hub::{GameKind, HubContext, Screen, ScreenTransition};

/// Guess a face, then watch the die tumble.
#[derive(Debug)]
pub struct DiceScreen {
    game: DiceGame,
    rolling_until: Option<Instant>,
}

impl DiceScreen {
    /// A fresh round.
    #[instrument]
    pub fn new() -> Self {
        Self {
            game: DiceGame::new(),
            rolling_until: None,
        }
    }

    /// The round in progress.
    pub fn game(&self) -> &DiceGame {
        &self.game
    }

    /// Whether the die is tumbling.
    pub fn is_rolling(&self) -> bool {
        self.rolling_until.is_some()
    }

    fn status(&self) -> String {
        if self.is_rolling() {
            return "Rolling...".to_string();
        }
        match (self.game.current_guess(), self.game.last_roll()) {
            (None, _) => "Pick a number from 1 to 6.".to_string(),
            (Some(guess), None) => format!("You guessed {}. Press Enter to roll.", guess),
            (Some(_), Some(roll)) => format!("Rolled {}. {}", roll.value, roll.result),
        }
    }
}

impl Default for DiceScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for DiceScreen {
    #[instrument(skip(self, frame, ctx))]
    fn render(&self, frame: &mut Frame, ctx: &HubContext) {
        let [header, body, footer] = frame_layout(frame.area());
        draw_header(frame, header, "DICE ROLL", ctx);

        let face = match (self.is_rolling(), self.game.last_roll()) {
            (true, _) => "🎲".to_string(),
            (false, Some(roll)) => roll.value.to_string(),
            (false, None) => "?".to_string(),
        };
        let guesses: String = (1..=FACES)
            .map(|n| {
                if *self.game.current_guess() == Some(n) {
                    format!("[{}]", n)
                } else {
                    format!(" {} ", n)
                }
            })
            .collect();
        let lines = vec![
            Line::styled(face, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Line::from(""),
            Line::from(guesses),
        ];
        let die = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(die, center_rect(body, 30, 7));

        draw_footer(
            frame,
            footer,
            &self.status(),
            "1-6: Guess | Enter: Roll | Esc: Back",
            ctx,
        );
    }

    #[instrument(skip(self, key, ctx))]
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut HubContext) -> ScreenTransition {
        if let Some(back) = back_key(&key) {
            return back;
        }
        if self.is_rolling() {
            return ScreenTransition::Stay;
        }
        match key.code {
            KeyCode::Char(c @ '1'..='6') => {
                if let Err(e) = self.game.guess(c as u8 - b'0') {
                    debug!(error = %e, "Guess rejected");
                }
                ctx.notice = None;
            }
            KeyCode::Enter | KeyCode::Char('r') if self.game.can_roll() => {
                self.rolling_until = Some(ctx.now + ctx.timing.dice_roll());
            }
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn tick(&mut self, ctx: &mut HubContext) -> ScreenTransition {
        if !is_due(self.rolling_until, ctx.now) {
            return ScreenTransition::Stay;
        }
        self.rolling_until = None;
        match self.game.roll(&mut ctx.rng) {
            Some(roll) if roll.result.is_win() => ScreenTransition::ClaimReward(GameKind::DiceRoll),
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub::screens::test_support::{ch, context, key};

    #[test]
    fn test_roll_needs_guess() {
        let mut ctx = context();
        let mut screen = DiceScreen::new();
        screen.handle_key(key(KeyCode::Enter), &mut ctx);
        assert!(!screen.is_rolling());
    }

    #[test]
    fn test_roll_settles_after_delay() {
        let mut ctx = context();
        let mut screen = DiceScreen::new();
        screen.handle_key(ch('4'), &mut ctx);
        screen.handle_key(key(KeyCode::Enter), &mut ctx);
        assert!(screen.is_rolling());
        assert_eq!(screen.tick(&mut ctx), ScreenTransition::Stay);
        assert!(screen.game().last_roll().is_none());

        ctx.now += ctx.timing.dice_roll();
        let transition = screen.tick(&mut ctx);
        let roll = screen.game().last_roll().expect("rolled");
        if roll.value == 4 {
            assert_eq!(transition, ScreenTransition::ClaimReward(GameKind::DiceRoll));
        } else {
            assert_eq!(transition, ScreenTransition::Stay);
        }
        assert!(!screen.is_rolling());
    }
}
