//! Decision envelopes.
//!
//! A strategy produces a [`Selection`]; the engine wraps it together with the caller's context
//! and key into a [`DecisionRecord`] for the recorder, and returns a [`Decision`] to callers that
//! ask for the full picture. The probability travels verbatim through all three.

/// Audit-friendly note describing how a selection came about.
///
/// Notes are intentionally small and stable. Prefer adding new variants over changing
/// existing semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExplorationNote {
    /// Epsilon-greedy followed the policy.
    Exploit,
    /// Epsilon-greedy explored uniformly.
    ///
    /// `matched_policy` is true when the uniform pick coincided with the policy action (the
    /// logged probability is then the exploit probability).
    Explore { matched_policy: bool },
    /// Action was sampled from a softmax distribution.
    SampledFromDistribution,
    /// Inverse-CDF fallthrough chose the last action with positive mass.
    NumericalFallbackToLastAction,
    /// Bootstrap followed one bag.
    Bag { index: u32 },
}

/// What a strategy returns: the action and the exact probability it was chosen with.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub action: u32,
    pub probability: f32,
    pub note: ExplorationNote,
}

impl Selection {
    pub fn new(action: u32, probability: f32, note: ExplorationNote) -> Self {
        debug_assert!(probability > 0.0 && probability <= 1.0, "p={probability}");
        Self {
            action,
            probability,
            note,
        }
    }
}

/// The unit handed to a recorder. Borrowed, immutable, alive for one call.
#[derive(Debug)]
pub struct DecisionRecord<'a, C: ?Sized> {
    pub context: &'a C,
    pub action: u32,
    pub probability: f32,
    pub key: &'a str,
}

impl<C: ?Sized> Clone for DecisionRecord<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for DecisionRecord<'_, C> {}

/// A recorded decision, returned by `Mwt::choose_action_explain`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub key: String,
    pub action: u32,
    pub probability: f32,
    pub note: ExplorationNote,
}

/// An owned decision row, as kept by [`MemoryRecorder`](crate::MemoryRecorder).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggedDecision<C> {
    pub context: C,
    pub action: u32,
    pub probability: f32,
    pub key: String,
}

impl<C: Clone> LoggedDecision<C> {
    pub fn from_record(record: &DecisionRecord<'_, C>) -> Self {
        Self {
            context: record.context.clone(),
            action: record.action,
            probability: record.probability,
            key: record.key.to_string(),
        }
    }
}
