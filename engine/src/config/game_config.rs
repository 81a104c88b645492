use serde::{Deserialize, Serialize};

use super::Validate;
use crate::games::tictactoe::Side;

pub const DEFAULT_CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

const MAX_LOG_PREFIX_LEN: usize = 32;

/// How the engine answers a human move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpponentKind {
    #[default]
    Optimal,
    Random,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub human_side: Side,
    pub opponent: OpponentKind,
    pub seed: Option<u64>,
    pub log_prefix: Option<String>,
    pub debug_log: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_side: Side::First,
            opponent: OpponentKind::Optimal,
            seed: None,
            log_prefix: None,
            debug_log: false,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.log_prefix {
            if prefix.is_empty() {
                return Err("log_prefix must not be empty".to_string());
            }
            if prefix.chars().count() > MAX_LOG_PREFIX_LEN {
                return Err(format!(
                    "log_prefix must be at most {} characters",
                    MAX_LOG_PREFIX_LEN
                ));
            }
        }
        Ok(())
    }
}
