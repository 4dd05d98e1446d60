//! Error types for episode resolution

use crate::contestant::{Category, ContestantId};

/// Errors raised while validating input or resolving an episode
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("duplicate contestant id: {0}")]
    DuplicateContestant(ContestantId),

    #[error("contestant {contestant} has no {category} stat")]
    MissingStatCategory {
        contestant: ContestantId,
        category: Category,
    },

    #[error("finale requires at least one active contestant")]
    NoActiveContestants,

    #[error("category table has no usable \"default\" entry")]
    MissingDefaultCategories,

    #[error("invalid category table: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
