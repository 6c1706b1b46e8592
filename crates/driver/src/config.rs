//! Session configuration.
//!
//! Read from environment variables, each with a default:
//!
//! - `BLOCKFALL_WIDTH`: grid columns (default 10)
//! - `BLOCKFALL_HEIGHT`: grid rows (default 20)
//! - `BLOCKFALL_TICK_MS`: gravity interval in milliseconds (default 500)
//! - `BLOCKFALL_SEED`: shape sequence seed (default derived from the clock)
//! - `BLOCKFALL_LOG_PATH`: JSON-lines event log (disabled when unset or blank)

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Result};

use crate::types::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICK_MS, MAX_GRID_SIDE};

/// Narrowest grid every spawn footprint fits in.
pub const MIN_GRID_WIDTH: u16 = 4;

/// Shortest grid that still has room to play.
pub const MIN_GRID_HEIGHT: u16 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub tick_ms: u64,
    pub seed: u32,
    pub log_path: Option<String>,
    /// Capacity of the action channel shared by all producers.
    pub channel_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            tick_ms: DEFAULT_TICK_MS,
            seed: 1,
            log_path: None,
            channel_capacity: 32,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with a custom variable source.
    ///
    /// Values that do not parse fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let width = lookup("BLOCKFALL_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.width);

        let height = lookup("BLOCKFALL_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.height);

        let tick_ms = lookup("BLOCKFALL_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.tick_ms);

        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            width,
            height,
            tick_ms,
            seed,
            log_path,
            channel_capacity: defaults.channel_capacity,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width >= MIN_GRID_WIDTH,
            "grid width {} is below the minimum of {}",
            self.width,
            MIN_GRID_WIDTH
        );
        ensure!(
            self.height >= MIN_GRID_HEIGHT,
            "grid height {} is below the minimum of {}",
            self.height,
            MIN_GRID_HEIGHT
        );
        ensure!(
            self.width <= MAX_GRID_SIDE && self.height <= MAX_GRID_SIDE,
            "grid {}x{} exceeds the maximum of {} cells per side",
            self.width,
            self.height,
            MAX_GRID_SIDE
        );
        ensure!(self.tick_ms > 0, "tick interval must be positive");
        ensure!(self.channel_capacity > 0, "channel capacity must be positive");
        Ok(())
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
