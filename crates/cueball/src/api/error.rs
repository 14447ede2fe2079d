use thiserror::Error;

use crate::api::types::BallKind;

/// Rejected ball construction.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BallError {
    #[error("ball {kind:?}: mass must be positive and finite, got {mass}")]
    NonPositiveMass { kind: BallKind, mass: f64 },

    #[error("ball {kind:?}: radius must be positive and finite, got {radius}")]
    NonPositiveRadius { kind: BallKind, radius: f64 },
}

/// Rejected table construction.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("ball {0:?} appears more than once")]
    DuplicateBall(BallKind),

    #[error(transparent)]
    Ball(#[from] BallError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors from loading or validating a [`TableConfig`](crate::api::config::TableConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
