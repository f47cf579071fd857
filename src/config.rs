//! Hub configuration loaded from TOML.

use crate::wallet::{AccountAddress, DevWallet, RewardIssuer, DEFAULT_REWARD_OCTAS};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Environment variable that replaces the dev wallet address.
pub const WALLET_ADDRESS_ENV: &str = "ARENA_WALLET_ADDRESS";

/// Default config file name.
pub const DEFAULT_CONFIG_FILE: &str = "arena.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct ArenaConfig {
    /// Simulated wallet.
    wallet: WalletConfig,
    /// Reward transfers.
    reward: RewardConfig,
    /// Presentation delays.
    timing: TimingConfig,
    /// Log output.
    logging: LoggingConfig,
}

/// Simulated wallet settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[serde(default)]
#[setters(prefix = "with_", into)]
pub struct WalletConfig {
    /// Address the dev wallet hands out.
    address: String,
    /// Whether the wallet "extension" is present.
    installed: bool,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            address: "0x5a0b1e2c3d4f5a6b7c8d9e0f1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b".to_string(),
            installed: true,
        }
    }
}

/// Reward settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct RewardConfig {
    /// Octas paid per winning round.
    amount_octas: u64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            amount_octas: DEFAULT_REWARD_OCTAS,
        }
    }
}

/// Presentation delays in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct TimingConfig {
    /// Pause before the computer's tic-tac-toe reply is shown.
    opponent_delay_ms: u64,
    /// Dice tumble.
    dice_roll_ms: u64,
    /// RPS "computer is choosing".
    rps_choosing_ms: u64,
    /// RPS reveal, counted from the player's choice.
    rps_reveal_ms: u64,
    /// How long a memory mismatch stays face up.
    memory_flip_back_ms: u64,
    /// Carousel slide.
    carousel_slide_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            opponent_delay_ms: 800,
            dice_roll_ms: 1500,
            rps_choosing_ms: 500,
            rps_reveal_ms: 2000,
            memory_flip_back_ms: 1000,
            carousel_slide_ms: 500,
        }
    }
}

impl TimingConfig {
    /// Opponent reply delay.
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    /// Dice roll delay.
    pub fn dice_roll(&self) -> Duration {
        Duration::from_millis(self.dice_roll_ms)
    }

    /// RPS choosing delay.
    pub fn rps_choosing(&self) -> Duration {
        Duration::from_millis(self.rps_choosing_ms)
    }

    /// RPS reveal delay, counted from the player's choice.
    pub fn rps_reveal(&self) -> Duration {
        Duration::from_millis(self.rps_reveal_ms)
    }

    /// Memory mismatch delay.
    pub fn memory_flip_back(&self) -> Duration {
        Duration::from_millis(self.memory_flip_back_ms)
    }

    /// Carousel slide duration.
    pub fn carousel_slide(&self) -> Duration {
        Duration::from_millis(self.carousel_slide_ms)
    }

    /// All delays zero. Used by tests and the simulator.
    pub fn instant() -> Self {
        Self {
            opponent_delay_ms: 0,
            dice_roll_ms: 0,
            rps_choosing_ms: 0,
            rps_reveal_ms: 0,
            memory_flip_back_ms: 0,
            carousel_slide_ms: 0,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[serde(default)]
#[setters(prefix = "with_", into)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    filter: String,
    /// Log file for the terminal hub.
    file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "aptos_arena=info".to_string(),
            file: PathBuf::from("aptos_arena.log"),
        }
    }
}

impl ArenaConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(amount = config.reward.amount_octas, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies environment overrides read through `lookup`.
    #[instrument(skip(self, lookup))]
    pub fn with_env_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(address) = lookup(WALLET_ADDRESS_ENV) {
            debug!(%address, "Wallet address overridden from environment");
            self.wallet.address = address;
            self.validate()?;
        }
        Ok(self)
    }

    /// Applies overrides from the process environment.
    pub fn with_process_env(self) -> Result<Self, ConfigError> {
        self.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// The configured wallet address.
    pub fn wallet_address(&self) -> Result<AccountAddress, ConfigError> {
        AccountAddress::parse(&self.wallet.address)
            .map_err(|e| ConfigError::new(format!("Invalid wallet address: {}", e.user_message())))
    }

    /// Builds the simulated wallet.
    pub fn dev_wallet(&self) -> Result<DevWallet, ConfigError> {
        let address = self.wallet_address()?;
        Ok(if self.wallet.installed {
            DevWallet::new(address)
        } else {
            DevWallet::not_installed(address)
        })
    }

    /// Builds the reward issuer.
    pub fn reward_issuer(&self) -> RewardIssuer {
        RewardIssuer::new(self.reward.amount_octas)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.wallet_address()?;
        if self.reward.amount_octas == 0 {
            return Err(ConfigError::new("Reward amount must be positive".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
