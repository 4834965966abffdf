//! Runtime configuration from environment variables.
//!
//! - `TUI_2048_SEED`: RNG seed (u32). Defaults to a clock-derived value.
//! - `TUI_2048_TARGET`: winning tile, a power of two >= 4. Default 2048.
//! - `TUI_2048_LOG_PATH`: write logs to this file. Logging is off otherwise,
//!   since stderr is hidden behind the alternate screen.
//! - `TUI_2048_SHARE_PATH`: append share posts as JSON lines to this file
//!   instead of printing them on exit.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};

use crate::types::TARGET_TILE;

pub const SEED_VAR: &str = "TUI_2048_SEED";
pub const TARGET_VAR: &str = "TUI_2048_TARGET";
pub const LOG_PATH_VAR: &str = "TUI_2048_LOG_PATH";
pub const SHARE_PATH_VAR: &str = "TUI_2048_SHARE_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub target: u32,
    pub log_path: Option<PathBuf>,
    pub share_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 1,
            target: TARGET_TILE,
            log_path: None,
            share_path: None,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup` (a stand-in for `std::env::var`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = match var(SEED_VAR) {
            Some(s) => s
                .parse()
                .with_context(|| format!("{SEED_VAR} must be a u32, got {s:?}"))?,
            None => clock_seed(),
        };

        let target = match var(TARGET_VAR) {
            Some(s) => {
                let target: u32 = s
                    .parse()
                    .with_context(|| format!("{TARGET_VAR} must be a number, got {s:?}"))?;
                if target < 4 || !target.is_power_of_two() {
                    bail!("{TARGET_VAR} must be a power of two >= 4, got {target}");
                }
                target
            }
            None => TARGET_TILE,
        };

        Ok(Self {
            seed,
            target,
            log_path: var(LOG_PATH_VAR).map(PathBuf::from),
            share_path: var(SHARE_PATH_VAR).map(PathBuf::from),
        })
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
