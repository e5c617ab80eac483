use std::time::Duration;

use coffee_shop_core::{dispatch::ParseStrategyError, Strategy};
use thiserror::Error;

pub const STRATEGY_VAR: &str = "COFFEE_STRATEGY";
pub const BARISTAS_VAR: &str = "COFFEE_BARISTAS";
pub const BREW_MS_VAR: &str = "COFFEE_BREW_MS";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error(transparent)]
  Strategy(#[from] ParseStrategyError),
  #[error("COFFEE_BARISTAS must be a positive integer, got `{0}`")]
  BaristaCount(String),
  #[error("COFFEE_BREW_MS must be a whole number of milliseconds, got `{0}`")]
  BrewTime(String),
  #[error("unexpected argument `{0}`")]
  UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
  // Which dispatch strategy serves the batch.
  pub strategy: Strategy,
  // Barista ids are drawn from 0..barista_count.
  pub barista_count: u32,
  // Simulated latency inside each order; zero means the barista never suspends.
  pub brew_time: Duration,
  // Used when RUST_LOG is not set.
  pub log_filter: String,
}

impl Default for ShopConfig {
  fn default() -> Self {
    Self {
      strategy: Strategy::Unsupervised,
      barista_count: 5,
      brew_time: Duration::ZERO,
      log_filter: "info".to_string(),
    }
  }
}

impl ShopConfig {
  /// Read the configuration from command line arguments (program name
  /// excluded) and the process environment.
  pub fn load<I>(args: I) -> Result<Self, ConfigError>
  where
    I: IntoIterator<Item = String>,
  {
    Self::from_sources(args, |key| std::env::var(key).ok())
  }

  fn from_sources<I, E>(args: I, env: E) -> Result<Self, ConfigError>
  where
    I: IntoIterator<Item = String>,
    E: Fn(&str) -> Option<String>,
  {
    let mut config = ShopConfig::default();

    if let Some(strategy) = env(STRATEGY_VAR) {
      config.strategy = strategy.parse()?;
    }

    if let Some(count) = env(BARISTAS_VAR) {
      config.barista_count = count
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|&count| count > 0)
        .ok_or(ConfigError::BaristaCount(count))?;
    }

    if let Some(millis) = env(BREW_MS_VAR) {
      config.brew_time = millis
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::BrewTime(millis))?;
    }

    let mut args = args.into_iter();
    if let Some(strategy) = args.next() {
      config.strategy = strategy.parse()?;
    }
    if let Some(extra) = args.next() {
      return Err(ConfigError::UnexpectedArgument(extra));
    }

    Ok(config)
  }
}
