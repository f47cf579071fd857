//! Game carousel.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::{debug, info, instrument};

use super::is_due;
use crate::hub::widgets::{center_rect, draw_footer, draw_header, frame_layout};
use crate::hub::{Carousel, GameKind, HubContext, Screen, ScreenTransition};

/// Direction of a pending slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slide {
    Previous,
    Next,
}

/// Carousel of games with a slide between cards.
///
/// The selected index changes when the slide finishes; keys pressed while a
/// slide runs are ignored.
#[derive(Debug)]
pub struct GameSelectScreen {
    games: Vec<GameKind>,
    carousel: Carousel,
    slide: Option<(Slide, Instant)>,
}

impl GameSelectScreen {
    /// Creates the carousel on the first game.
    #[instrument]
    pub fn new() -> Self {
        let games = GameKind::all();
        let carousel = Carousel::new(games.len());
        Self {
            games,
            carousel,
            slide: None,
        }
    }

    /// The game under the cursor.
    pub fn selected(&self) -> GameKind {
        self.games[self.carousel.index()]
    }

    /// Whether a slide is running.
    pub fn is_sliding(&self) -> bool {
        self.slide.is_some()
    }

    fn start_slide(&mut self, slide: Slide, ctx: &HubContext) {
        debug!(?slide, "Starting slide");
        self.slide = Some((slide, ctx.now + ctx.timing.carousel_slide()));
    }
}

impl Default for GameSelectScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for GameSelectScreen {
    #[instrument(skip(self, frame, ctx))]
    fn render(&self, frame: &mut Frame, ctx: &HubContext) {
        let [header, body, footer] = frame_layout(frame.area());
        draw_header(frame, header, "Choose your game", ctx);

        let game = self.selected();
        let card = center_rect(body, 70, 14);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(5)])
            .split(card);

        let title_style = if self.is_sliding() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };
        let title = Paragraph::new(format!("◀  {}  ▶", game.title()))
            .style(title_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(format!(
                " {}/{} ",
                self.carousel.index() + 1,
                self.carousel.len()
            )));
        frame.render_widget(title, chunks[0]);

        let description = Paragraph::new(game.description())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(description, chunks[1]);

        let mut rules: Vec<Line> = game
            .how_to_play()
            .iter()
            .map(|line| Line::from(format!("• {}", line)))
            .collect();
        if game.pays_reward() {
            rules.push(Line::styled(
                "Winning pays 0.001 APT to your wallet.",
                Style::default().fg(Color::Green),
            ));
        }
        let how_to = Paragraph::new(rules)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("How to play"));
        frame.render_widget(how_to, chunks[2]);

        draw_footer(
            frame,
            footer,
            "",
            "←→: Browse | Enter: Play | d: Disconnect | q: Quit",
            ctx,
        );
    }

    #[instrument(skip(self, key, ctx))]
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut HubContext) -> ScreenTransition {
        if self.is_sliding() {
            return ScreenTransition::Stay;
        }
        match key.code {
            KeyCode::Left => {
                self.start_slide(Slide::Previous, ctx);
                ScreenTransition::Stay
            }
            KeyCode::Right => {
                self.start_slide(Slide::Next, ctx);
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let game = self.selected();
                info!(%game, "Game selected");
                ctx.clear_banners();
                ScreenTransition::Play(game)
            }
            KeyCode::Char('d') | KeyCode::Char('D') => ScreenTransition::Disconnect,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    fn tick(&mut self, ctx: &mut HubContext) -> ScreenTransition {
        if let Some((slide, until)) = self.slide
            && is_due(Some(until), ctx.now)
        {
            match slide {
                Slide::Previous => self.carousel.previous(),
                Slide::Next => self.carousel.next(),
            };
            self.slide = None;
            debug!(game = %self.selected(), "Slide finished");
        }
        ScreenTransition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub::screens::test_support::{ch, context, key};

    #[test]
    fn test_slide_changes_game_after_delay() {
        let mut ctx = context();
        let mut screen = GameSelectScreen::new();
        screen.handle_key(key(KeyCode::Left), &mut ctx);
        assert_eq!(screen.selected(), GameKind::DiceRoll);
        // Input during the slide is ignored.
        assert_eq!(screen.handle_key(key(KeyCode::Enter), &mut ctx), ScreenTransition::Stay);

        ctx.now += ctx.timing.carousel_slide();
        screen.tick(&mut ctx);
        assert_eq!(screen.selected(), GameKind::TicTacToe);
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &mut ctx),
            ScreenTransition::Play(GameKind::TicTacToe)
        );
    }

    #[test]
    fn test_disconnect_key() {
        let mut ctx = context();
        let mut screen = GameSelectScreen::new();
        assert_eq!(screen.handle_key(ch('d'), &mut ctx), ScreenTransition::Disconnect);
    }
}
