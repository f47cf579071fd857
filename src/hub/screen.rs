//! Screen trait, shared context and transition type for the hub state machine.

use std::time::Instant;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::config::TimingConfig;
use crate::hub::GameKind;
use crate::random::ArenaRng;
use crate::wallet::WalletSession;

/// The result of handling an input event or a tick on a screen.
///
/// Screens return this to drive the
/// [`HubController`](crate::hub::HubController) state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Try to connect the named wallet.
    ConnectWallet(String),
    /// Disconnect and return to the wallet screen.
    Disconnect,
    /// Navigate to the game carousel.
    GoToGameSelect,
    /// Start the chosen game.
    Play(GameKind),
    /// A round of this game was won; pay the reward.
    ClaimReward(GameKind),
    /// Exit the hub.
    Quit,
}

/// State shared by every screen.
#[derive(Debug)]
pub struct HubContext {
    /// Randomness for every game.
    pub rng: ArenaRng,
    /// Presentation delays.
    pub timing: TimingConfig,
    /// Wallet connection and last error.
    pub wallet: WalletSession,
    /// Last informational message, e.g. a sent reward.
    pub notice: Option<String>,
    /// Time of the current loop iteration.
    pub now: Instant,
}

impl HubContext {
    /// Creates a disconnected context.
    pub fn new(rng: ArenaRng, timing: TimingConfig) -> Self {
        Self {
            rng,
            timing,
            wallet: WalletSession::new(),
            notice: None,
            now: Instant::now(),
        }
    }

    /// Clears the notice and wallet error banners.
    pub fn clear_banners(&mut self) {
        self.notice = None;
        self.wallet.clear_error();
    }
}

/// Trait implemented by each screen in the hub state machine.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// Delayed effects are scheduled against [`HubContext::now`] and fire from
/// [`Screen::tick`].
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, ctx: &HubContext);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut HubContext) -> ScreenTransition;

    /// Fires any delayed effect that is due.
    fn tick(&mut self, _ctx: &mut HubContext) -> ScreenTransition {
        ScreenTransition::Stay
    }
}
