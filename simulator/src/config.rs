use roulette_execution::{StrategyKind, UnknownStrategy};
use roulette_types::casino::{
    DEFAULT_INITIAL_STAKE, DEFAULT_SAMPLES, DEFAULT_SESSION_DURATION, TABLE_LIMIT, TABLE_MINIMUM,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

/// Configuration for a [crate::Simulator] run.
///
/// Every field is optional in YAML; missing fields take their defaults.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub player: String,
    pub session_duration: u32,
    pub initial_stake: u64,
    pub samples: usize,
    pub seed: Option<u64>,

    pub table_minimum: u64,
    pub table_limit: u64,
    pub base_bet: Option<u64>,

    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player: StrategyKind::Passenger57.name().to_string(),
            session_duration: DEFAULT_SESSION_DURATION,
            initial_stake: DEFAULT_INITIAL_STAKE,
            samples: DEFAULT_SAMPLES,
            seed: None,
            table_minimum: TABLE_MINIMUM,
            table_limit: TABLE_LIMIT,
            base_bet: None,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    UnknownPlayer(#[from] UnknownStrategy),
    #[error("invalid log level: {value}")]
    InvalidLogLevel { value: String },
    #[error("{field} must be > 0 (got {value})")]
    InvalidNonZero { field: &'static str, value: u64 },
    #[error("table minimum {minimum} exceeds table limit {limit}")]
    MinimumAboveLimit { minimum: u64, limit: u64 },
    #[error("base bet {base_bet} is outside the table range {minimum}..={limit}")]
    BaseBetOutOfRange {
        base_bet: u64,
        minimum: u64,
        limit: u64,
    },
}

pub struct ValidatedConfig {
    pub strategy: StrategyKind,
    pub session_duration: u32,
    pub initial_stake: u64,
    pub samples: usize,
    pub seed: Option<u64>,

    pub table_minimum: u64,
    pub table_limit: u64,
    pub base_bet: u64,

    pub log_level: Level,
}

fn non_zero(field: &'static str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidNonZero { field, value });
    }
    Ok(())
}

impl Config {
    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        let strategy = StrategyKind::from_str(&self.player)?;

        non_zero("session_duration", u64::from(self.session_duration))?;
        non_zero("samples", self.samples as u64)?;
        non_zero("table_minimum", self.table_minimum)?;
        if self.table_minimum > self.table_limit {
            return Err(ConfigError::MinimumAboveLimit {
                minimum: self.table_minimum,
                limit: self.table_limit,
            });
        }

        let base_bet = self.base_bet.unwrap_or(self.table_minimum);
        if base_bet < self.table_minimum || base_bet > self.table_limit {
            return Err(ConfigError::BaseBetOutOfRange {
                base_bet,
                minimum: self.table_minimum,
                limit: self.table_limit,
            });
        }

        let log_level =
            Level::from_str(&self.log_level).map_err(|_| ConfigError::InvalidLogLevel {
                value: self.log_level.clone(),
            })?;

        Ok(ValidatedConfig {
            strategy,
            session_duration: self.session_duration,
            initial_stake: self.initial_stake,
            samples: self.samples,
            seed: self.seed,
            table_minimum: self.table_minimum,
            table_limit: self.table_limit,
            base_bet,
            log_level,
        })
    }
}
