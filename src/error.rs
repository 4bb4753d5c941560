//! Error types for each stage of a decision.

use thiserror::Error;

/// Error type recorders may return. Any `Error + Send + Sync` converts into it with `?`.
pub type RecordError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Invalid construction-time configuration. Never produced at decision time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("num_actions must be > 0")]
    NoActions,

    #[error("epsilon must be a finite value in [0, 1], got {0}")]
    EpsilonOutOfRange(f32),

    #[error("lambda must be finite and > 0, got {0}")]
    LambdaNotPositive(f32),

    #[error("bootstrap needs at least one bag")]
    NoBags,
}

/// A collaborator broke its contract while an action was being selected.
///
/// No decision exists when this is returned, and nothing was recorded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    #[error("policy returned action {action}, expected < {num_actions}")]
    ActionOutOfRange { action: u32, num_actions: u32 },

    #[error("scorer returned {got} scores, expected {expected}")]
    ScoreLengthMismatch { expected: u32, got: usize },

    #[error("scorer returned non-finite score {score} for action {action}")]
    NonFiniteScore { action: u32, score: f32 },

    #[error("explorer reported probability {probability} for action {action}, expected (0, 1]")]
    ProbabilityOutOfRange { action: u32, probability: f32 },
}

/// Failure of a single `choose_action` call.
#[derive(Debug, Error)]
pub enum MwtError {
    /// No decision was made.
    #[error("action selection failed: {0}")]
    Selection(#[from] SelectionError),

    /// The decision was made but not durably logged.
    #[error(
        "decision {key:?} chose action {action} (p={probability}) but recording failed: {source}"
    )]
    Record {
        key: String,
        action: u32,
        probability: f32,
        #[source]
        source: RecordError,
    },
}

impl MwtError {
    /// The action that was decided, if selection got that far.
    pub fn decided_action(&self) -> Option<u32> {
        match self {
            MwtError::Selection(_) => None,
            MwtError::Record { action, .. } => Some(*action),
        }
    }
}
