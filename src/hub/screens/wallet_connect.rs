//! Wallet connect splash screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use tracing::{debug, info, instrument};

use crate::hub::widgets::{center_rect, draw_footer, frame_layout};
use crate::hub::{HubContext, Screen, ScreenTransition};
use crate::wallet::SUPPORTED_WALLETS;

/// Splash screen asking the player to connect a wallet.
#[derive(Debug)]
pub struct WalletConnectScreen {
    choosing: bool,
    list_state: ListState,
}

impl WalletConnectScreen {
    /// Creates the splash screen with the wallet list hidden.
    #[instrument]
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            choosing: false,
            list_state,
        }
    }

    /// Whether the wallet list is open.
    pub fn is_choosing(&self) -> bool {
        self.choosing
    }

    fn selected_wallet(&self) -> &'static str {
        let idx = self.list_state.selected().unwrap_or(0);
        SUPPORTED_WALLETS[idx.min(SUPPORTED_WALLETS.len() - 1)]
    }

    fn step(&mut self, forward: bool) {
        let count = SUPPORTED_WALLETS.len();
        let i = self.list_state.selected().unwrap_or(0);
        let next = if forward {
            (i + 1) % count
        } else {
            (i + count - 1) % count
        };
        self.list_state.select(Some(next));
    }
}

impl Default for WalletConnectScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for WalletConnectScreen {
    #[instrument(skip(self, frame, ctx))]
    fn render(&self, frame: &mut Frame, ctx: &HubContext) {
        let [_, body, footer] = frame_layout(frame.area());
        let panel = center_rect(body, 64, 14);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(4), Constraint::Min(3)])
            .split(panel);

        let title = Paragraph::new("APTOS ARENA")
            .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let welcome = Paragraph::new(
            "Welcome, adventurer. Connect your wallet to enter the arena and begin your quest.",
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(welcome, chunks[1]);

        if self.choosing {
            let items: Vec<ListItem> = SUPPORTED_WALLETS
                .iter()
                .map(|name| ListItem::new(format!("💎 {}", name)))
                .collect();
            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title("Choose your wallet:"))
                .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .highlight_symbol("> ");
            let mut list_state = self.list_state;
            frame.render_stateful_widget(list, chunks[2], &mut list_state);
        } else {
            let label = if *ctx.wallet.connecting() {
                "Connecting..."
            } else {
                "[ Enter ] Connect Wallet"
            };
            let button = Paragraph::new(label)
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(button, chunks[2]);
        }

        let help = if self.choosing {
            "↑↓: Choose | Enter: Connect | Esc: Cancel"
        } else {
            "Enter: Connect | q: Quit"
        };
        draw_footer(frame, footer, "", help, ctx);
    }

    #[instrument(skip(self, key, ctx))]
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut HubContext) -> ScreenTransition {
        match key.code {
            KeyCode::Enter if self.choosing => {
                let wallet = self.selected_wallet();
                info!(wallet, "Wallet chosen");
                self.choosing = false;
                ScreenTransition::ConnectWallet(wallet.to_string())
            }
            KeyCode::Enter => {
                debug!("Showing wallet options");
                ctx.clear_banners();
                self.choosing = true;
                ScreenTransition::Stay
            }
            KeyCode::Up if self.choosing => {
                self.step(false);
                ScreenTransition::Stay
            }
            KeyCode::Down if self.choosing => {
                self.step(true);
                ScreenTransition::Stay
            }
            KeyCode::Esc if self.choosing => {
                self.choosing = false;
                ScreenTransition::Stay
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub::screens::test_support::{context, key};

    #[test]
    fn test_enter_twice_connects_petra() {
        let mut ctx = context();
        let mut screen = WalletConnectScreen::new();
        assert_eq!(screen.handle_key(key(KeyCode::Enter), &mut ctx), ScreenTransition::Stay);
        assert!(screen.is_choosing());
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &mut ctx),
            ScreenTransition::ConnectWallet("Petra".to_string())
        );
        assert!(!screen.is_choosing());
    }

    #[test]
    fn test_escape_cancels_then_quits() {
        let mut ctx = context();
        let mut screen = WalletConnectScreen::new();
        screen.handle_key(key(KeyCode::Enter), &mut ctx);
        assert_eq!(screen.handle_key(key(KeyCode::Esc), &mut ctx), ScreenTransition::Stay);
        assert_eq!(screen.handle_key(key(KeyCode::Esc), &mut ctx), ScreenTransition::Quit);
    }
}
