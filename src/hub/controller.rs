//! Hub controller: the state machine driving the multi-screen TUI.

use std::time::Instant;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument, warn};

use crate::hub::screens::{
    DiceScreen, GameSelectScreen, MemoryScreen, MysteryBoxScreen, RpsScreen, TicTacToeScreen,
    WalletConnectScreen,
};
use crate::hub::{GameKind, HubContext, Screen, ScreenTransition};
use crate::wallet::{RewardIssuer, WalletProvider};

/// Active screen in the hub state machine.
#[derive(Debug)]
pub enum ActiveScreen {
    /// Splash screen.
    WalletConnect(WalletConnectScreen),
    /// Carousel.
    GameSelect(GameSelectScreen),
    /// Dice roll.
    Dice(DiceScreen),
    /// Mystery box.
    MysteryBox(MysteryBoxScreen),
    /// Rock, paper, scissors.
    Rps(RpsScreen),
    /// Memory match.
    Memory(MemoryScreen),
    /// Tic-tac-toe.
    TicTacToe(TicTacToeScreen),
}

impl ActiveScreen {
    fn screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::WalletConnect(s) => s,
            ActiveScreen::GameSelect(s) => s,
            ActiveScreen::Dice(s) => s,
            ActiveScreen::MysteryBox(s) => s,
            ActiveScreen::Rps(s) => s,
            ActiveScreen::Memory(s) => s,
            ActiveScreen::TicTacToe(s) => s,
        }
    }

    fn screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::WalletConnect(s) => s,
            ActiveScreen::GameSelect(s) => s,
            ActiveScreen::Dice(s) => s,
            ActiveScreen::MysteryBox(s) => s,
            ActiveScreen::Rps(s) => s,
            ActiveScreen::Memory(s) => s,
            ActiveScreen::TicTacToe(s) => s,
        }
    }

    /// The game this screen plays, if any.
    pub fn game(&self) -> Option<GameKind> {
        match self {
            ActiveScreen::WalletConnect(_) | ActiveScreen::GameSelect(_) => None,
            ActiveScreen::Dice(_) => Some(GameKind::DiceRoll),
            ActiveScreen::MysteryBox(_) => Some(GameKind::MysteryBox),
            ActiveScreen::Rps(_) => Some(GameKind::RockPaperScissors),
            ActiveScreen::Memory(_) => Some(GameKind::MemoryMatch),
            ActiveScreen::TicTacToe(_) => Some(GameKind::TicTacToe),
        }
    }
}

/// Controller that drives the hub state machine.
///
/// Call [`HubController::run`] to start the event loop.
pub struct HubController {
    ctx: HubContext,
    provider: Box<dyn WalletProvider>,
    issuer: RewardIssuer,
}

impl HubController {
    /// Creates a new hub controller.
    #[instrument(skip(ctx, provider), fields(wallet = provider.name()))]
    pub fn new(ctx: HubContext, provider: Box<dyn WalletProvider>, issuer: RewardIssuer) -> Self {
        info!("Creating HubController");
        Self {
            ctx,
            provider,
            issuer,
        }
    }

    /// Shared screen context.
    pub fn context(&self) -> &HubContext {
        &self.ctx
    }

    /// Mutable shared screen context.
    pub fn context_mut(&mut self) -> &mut HubContext {
        &mut self.ctx
    }

    /// Runs the hub event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend + std::io::Write>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting hub event loop");

        let mut screen = ActiveScreen::WalletConnect(WalletConnectScreen::new());

        loop {
            self.ctx.now = Instant::now();
            let transition = screen.screen_mut().tick(&mut self.ctx);
            screen = match self.apply_transition(transition, screen).await {
                Some(next) => next,
                None => return Ok(()),
            };

            terminal.draw(|f| screen.screen().render(f, &self.ctx))?;

            // Poll for input with short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                self.ctx.now = Instant::now();
                let transition = screen.screen_mut().handle_key(key, &mut self.ctx);
                screen = match self.apply_transition(transition, screen).await {
                    Some(next) => next,
                    None => {
                        info!("Hub quitting");
                        return Ok(());
                    }
                };
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    pub async fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        if transition != ScreenTransition::Stay {
            debug!(transition = ?transition, "Applying screen transition");
        }
        match transition {
            ScreenTransition::Stay => Some(current),

            ScreenTransition::ConnectWallet(name) => {
                if self.ctx.wallet.select_wallet(&name).is_err() {
                    return Some(current);
                }
                match self.ctx.wallet.connect(self.provider.as_ref()).await {
                    Ok(()) => {
                        info!("Navigating to GameSelect");
                        Some(ActiveScreen::GameSelect(GameSelectScreen::new()))
                    }
                    Err(e) => {
                        warn!(error = %e, "Staying on WalletConnect");
                        Some(current)
                    }
                }
            }

            ScreenTransition::Disconnect => {
                self.ctx.wallet.disconnect(self.provider.as_ref()).await;
                self.ctx.notice = None;
                info!("Navigating to WalletConnect");
                Some(ActiveScreen::WalletConnect(WalletConnectScreen::new()))
            }

            ScreenTransition::GoToGameSelect => {
                if !self.ctx.wallet.is_connected() {
                    warn!("No wallet for GameSelect, redirecting to WalletConnect");
                    return Some(ActiveScreen::WalletConnect(WalletConnectScreen::new()));
                }
                info!("Navigating to GameSelect");
                Some(ActiveScreen::GameSelect(GameSelectScreen::new()))
            }

            ScreenTransition::Play(game) => {
                info!(%game, "Navigating to game");
                Some(self.open_game(game))
            }

            ScreenTransition::ClaimReward(game) => {
                self.claim_reward(game).await;
                Some(current)
            }

            ScreenTransition::Quit => None,
        }
    }

    fn open_game(&mut self, game: GameKind) -> ActiveScreen {
        match game {
            GameKind::DiceRoll => ActiveScreen::Dice(DiceScreen::new()),
            GameKind::MysteryBox => ActiveScreen::MysteryBox(MysteryBoxScreen::new(&mut self.ctx)),
            GameKind::RockPaperScissors => ActiveScreen::Rps(RpsScreen::new()),
            GameKind::MemoryMatch => ActiveScreen::Memory(MemoryScreen::new(&mut self.ctx)),
            GameKind::TicTacToe => ActiveScreen::TicTacToe(TicTacToeScreen::new()),
        }
    }

    /// Pays the win reward for `game`. Failures end up in the wallet banner.
    #[instrument(skip(self))]
    async fn claim_reward(&mut self, game: GameKind) {
        if !game.pays_reward() {
            debug!(%game, "Game pays no reward");
            return;
        }
        match self
            .issuer
            .issue(&mut self.ctx.wallet, self.provider.as_ref())
            .await
        {
            Ok(receipt) => {
                self.ctx.notice = Some(format!(
                    "Reward sent: {} octas (tx {})",
                    self.issuer.amount_octas(),
                    receipt.hash()
                ));
            }
            Err(e) => warn!(error = %e, "Reward not sent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimingConfig;
    use crate::random::arena_rng;
    use crate::wallet::{AccountAddress, DevWallet};

    fn controller(wallet: DevWallet) -> HubController {
        let ctx = HubContext::new(arena_rng(Some(1)), TimingConfig::instant());
        HubController::new(ctx, Box::new(wallet), RewardIssuer::default())
    }

    fn address() -> AccountAddress {
        AccountAddress::parse("0xabc123def4567890").unwrap()
    }

    fn splash() -> ActiveScreen {
        ActiveScreen::WalletConnect(WalletConnectScreen::new())
    }

    #[tokio::test]
    async fn test_connect_moves_to_game_select() {
        let mut hub = controller(DevWallet::new(address()));
        let next = hub
            .apply_transition(ScreenTransition::ConnectWallet("Petra".into()), splash())
            .await
            .unwrap();
        assert!(matches!(next, ActiveScreen::GameSelect(_)));
        assert!(hub.context().wallet.is_connected());
    }

    #[tokio::test]
    async fn test_missing_wallet_stays_on_splash() {
        let mut hub = controller(DevWallet::not_installed(address()));
        let next = hub
            .apply_transition(ScreenTransition::ConnectWallet("Petra".into()), splash())
            .await
            .unwrap();
        assert!(matches!(next, ActiveScreen::WalletConnect(_)));
        assert_eq!(
            hub.context().wallet.error().as_deref(),
            Some("Petra wallet not found. Please install the Petra extension.")
        );
    }

    #[tokio::test]
    async fn test_unsupported_wallet_stays_on_splash() {
        let mut hub = controller(DevWallet::new(address()));
        let next = hub
            .apply_transition(ScreenTransition::ConnectWallet("Martian".into()), splash())
            .await
            .unwrap();
        assert!(matches!(next, ActiveScreen::WalletConnect(_)));
        assert_eq!(
            hub.context().wallet.error().as_deref(),
            Some("Only Petra wallet is supported in this demo.")
        );
    }

    #[tokio::test]
    async fn test_game_select_requires_connection() {
        let mut hub = controller(DevWallet::new(address()));
        let next = hub
            .apply_transition(ScreenTransition::GoToGameSelect, splash())
            .await
            .unwrap();
        assert!(matches!(next, ActiveScreen::WalletConnect(_)));
    }

    #[tokio::test]
    async fn test_play_and_reward_flow() {
        let mut hub = controller(DevWallet::new(address()));
        hub.apply_transition(ScreenTransition::ConnectWallet("Petra".into()), splash())
            .await
            .unwrap();
        let screen = hub
            .apply_transition(
                ScreenTransition::Play(GameKind::DiceRoll),
                ActiveScreen::GameSelect(GameSelectScreen::new()),
            )
            .await
            .unwrap();
        assert_eq!(screen.game(), Some(GameKind::DiceRoll));

        let screen = hub
            .apply_transition(ScreenTransition::ClaimReward(GameKind::DiceRoll), screen)
            .await
            .unwrap();
        assert_eq!(screen.game(), Some(GameKind::DiceRoll));
        let notice = hub.context().notice.clone().unwrap();
        assert!(notice.starts_with("Reward sent: 100000 octas"), "{notice}");
    }

    #[tokio::test]
    async fn test_unpaid_game_sends_nothing() {
        let mut hub = controller(DevWallet::new(address()));
        hub.apply_transition(ScreenTransition::ConnectWallet("Petra".into()), splash())
            .await
            .unwrap();
        hub.apply_transition(
            ScreenTransition::ClaimReward(GameKind::TicTacToe),
            ActiveScreen::TicTacToe(TicTacToeScreen::new()),
        )
        .await
        .unwrap();
        assert!(hub.context().notice.is_none());
    }

    #[tokio::test]
    async fn test_disconnect_and_quit() {
        let mut hub = controller(DevWallet::new(address()));
        hub.apply_transition(ScreenTransition::ConnectWallet("Petra".into()), splash())
            .await
            .unwrap();
        let next = hub
            .apply_transition(
                ScreenTransition::Disconnect,
                ActiveScreen::GameSelect(GameSelectScreen::new()),
            )
            .await
            .unwrap();
        assert!(matches!(next, ActiveScreen::WalletConnect(_)));
        assert!(!hub.context().wallet.is_connected());
        assert!(hub.apply_transition(ScreenTransition::Quit, next).await.is_none());
    }
}
