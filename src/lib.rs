//! Aptos Arena library - casino mini-games with wallet rewards
//!
//! # Architecture
//!
//! - **Games**: tic-tac-toe against a heuristic opponent, plus dice, mystery
//!   box, rock-paper-scissors and memory match
//! - **Random**: injectable randomness shared by every game
//! - **Wallet**: wallet provider capability, connection state and rewards
//! - **Hub**: terminal screens, carousel and navigation state machine
//! - **Config**: TOML configuration with environment overrides
//!
//! # Example
//!
//! ```
//! use aptos_arena::{GameSession, MoveResult, Position, ScriptedSource};
//!
//! let mut session = GameSession::new();
//! let mut rng = ScriptedSource::default();
//! let report = session.play_turn(0, &mut rng);
//! assert_eq!(report.player, MoveResult::Accepted(Position::TopLeft));
//! // The opponent answers a corner with the center.
//! assert_eq!(report.opponent.map(|m| m.position), Some(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod hub;
mod random;
mod simulate;
mod wallet;

pub mod games;

// Crate-level exports - Configuration
pub use config::{
    ArenaConfig, ConfigError, DEFAULT_CONFIG_FILE, LoggingConfig, RewardConfig, TimingConfig,
    WALLET_ADDRESS_ENV, WalletConfig,
};

// Crate-level exports - Randomness
pub use random::{ArenaRng, RandomSource, ScriptedSource, arena_rng};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameOutcome, GameSession, Mark, Move, MoveReason, MoveResult, OpponentMove, Position,
    RejectReason, SessionState, Square, TurnReport, detect_outcome, plan_opponent_move,
    select_opponent_move,
};

// Crate-level exports - Chance games
pub use games::RoundResult;
pub use games::dice::{DiceGame, DiceRoll, GuessError};
pub use games::memory::{Card, FlipResult, MemoryGame};
pub use games::mystery_box::{BoxStatus, MysteryBoxGame, OpenResult};
pub use games::rps::{Choice, RpsPhase, RpsRound};

// Crate-level exports - Wallet
pub use wallet::{
    AccountAddress, DEFAULT_REWARD_OCTAS, DevWallet, ENTRY_FUNCTION_PAYLOAD, RewardIssuer,
    SUPPORTED_WALLETS, TRANSFER_FUNCTION, TransactionPayload, TransactionReceipt, WalletAccount,
    WalletError, WalletErrorKind, WalletProvider, WalletSession, is_supported,
};

// Crate-level exports - Hub
pub use hub::{
    ActiveScreen, Carousel, DiceScreen, GameKind, GameSelectScreen, HubContext, HubController,
    MemoryScreen, MysteryBoxScreen, RpsScreen, Screen, ScreenTransition, TicTacToeScreen,
    WalletConnectScreen, run_hub,
};

// Crate-level exports - Simulation
pub use simulate::{SimulationReport, play_random_game, simulate};
