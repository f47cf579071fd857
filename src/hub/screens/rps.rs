//! Rock, paper, scissors screen.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

use super::{back_key, is_due};
use crate::games::rps::{Choice, RpsPhase, RpsRound};
use crate::hub::widgets::{center_rect, draw_footer, draw_header, frame_layout};
use crate::hub::{GameKind, HubContext, Screen, ScreenTransition};

fn glyph(choice: Option<Choice>) -> &'static str {
    match choice {
        Some(Choice::Rock) => "🪨",
        Some(Choice::Paper) => "📄",
        Some(Choice::Scissors) => "✂",
        None => "❓",
    }
}

/// Throw a hand, wait for the computer's reveal.
#[derive(Debug)]
pub struct RpsScreen {
    round: RpsRound,
    reveal_starts: Option<Instant>,
    reveal_ends: Option<Instant>,
}

impl RpsScreen {
    /// A fresh round.
    #[instrument]
    pub fn new() -> Self {
        Self {
            round: RpsRound::new(),
            reveal_starts: None,
            reveal_ends: None,
        }
    }

    /// The round in progress.
    pub fn round(&self) -> &RpsRound {
        &self.round
    }

    fn status(&self) -> String {
        match self.round.phase() {
            RpsPhase::Idle => "Choose your hand.".to_string(),
            RpsPhase::Choosing => "The computer is choosing...".to_string(),
            RpsPhase::Revealing => "Revealing...".to_string(),
            RpsPhase::Done(result) => result.to_string(),
        }
    }
}

impl Default for RpsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for RpsScreen {
    #[instrument(skip(self, frame, ctx))]
    fn render(&self, frame: &mut Frame, ctx: &HubContext) {
        let [header, body, footer] = frame_layout(frame.area());
        draw_header(frame, header, "ROCK, PAPER, SCISSORS", ctx);

        let computer = match self.round.phase() {
            RpsPhase::Revealing => "🔄",
            _ => glyph(self.round.computer()),
        };
        let lines = vec![
            Line::from(format!("You  {}   vs   {}  Computer", glyph(self.round.player()), computer)),
            Line::from(""),
            Line::styled(
                self.status(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ];
        let arena = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(arena, center_rect(body, 44, 5));

        draw_footer(
            frame,
            footer,
            &self.status(),
            "r: Rock | p: Paper | s: Scissors | n: Reset | Esc: Back",
            ctx,
        );
    }

    #[instrument(skip(self, key, ctx))]
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut HubContext) -> ScreenTransition {
        if let Some(back) = back_key(&key) {
            return back;
        }
        match key.code {
            KeyCode::Char('n') | KeyCode::Char('N')
                if !matches!(self.round.phase(), RpsPhase::Choosing | RpsPhase::Revealing) =>
            {
                self.round.reset();
            }
            KeyCode::Char(c) => {
                if let Some(hand) = Choice::from_key(c)
                    && self.round.choose(hand, &mut ctx.rng)
                {
                    ctx.notice = None;
                    self.reveal_starts = Some(ctx.now + ctx.timing.rps_choosing());
                    self.reveal_ends = Some(ctx.now + ctx.timing.rps_reveal());
                }
            }
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn tick(&mut self, ctx: &mut HubContext) -> ScreenTransition {
        if is_due(self.reveal_starts, ctx.now) {
            self.reveal_starts = None;
            self.round.start_reveal();
        }
        if is_due(self.reveal_ends, ctx.now) {
            self.reveal_ends = None;
            if let Some(result) = self.round.reveal()
                && result.is_win()
            {
                return ScreenTransition::ClaimReward(GameKind::RockPaperScissors);
            }
        }
        ScreenTransition::Stay
    }
}
