//! Softmax exploration over caller-supplied scores.
//!
//! Scores are turned into a distribution `p_i ∝ exp(score_i / lambda)` and one action is drawn
//! by inverse CDF. The logged probability is `p` of the drawn action.

use crate::alloc::{sample_index, softmax};
use crate::explorer::check_action;
use crate::{
    ConfigError, DecisionSeed, DrawDomain, ExplorationNote, Explorer, Scorer, Selection,
    SelectionError, SoftmaxConfig,
};

/// Softmax strategy.
#[derive(Debug, Clone)]
pub struct Softmax<S> {
    cfg: SoftmaxConfig,
    scorer: S,
}

impl<S> Softmax<S> {
    pub fn new(cfg: SoftmaxConfig, scorer: S) -> Result<Self, ConfigError> {
        cfg.validate()?;
        tracing::debug!(
            lambda = cfg.lambda,
            num_actions = cfg.num_actions,
            "softmax explorer configured"
        );
        Ok(Self { cfg, scorer })
    }

    pub fn config(&self) -> SoftmaxConfig {
        self.cfg
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// The full distribution this strategy samples from for `context`.
    ///
    /// Useful for logging the whole propensity vector next to the decision.
    pub fn probabilities<C: ?Sized>(&self, context: &C) -> Result<Vec<f64>, SelectionError>
    where
        S: Scorer<C>,
    {
        let scores = self.scorer.scores(context);
        if scores.len() != self.cfg.num_actions as usize {
            return Err(SelectionError::ScoreLengthMismatch {
                expected: self.cfg.num_actions,
                got: scores.len(),
            });
        }
        if let Some((i, &score)) = scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
            return Err(SelectionError::NonFiniteScore {
                action: i as u32,
                score,
            });
        }
        Ok(softmax(&scores, self.cfg.lambda as f64))
    }
}

impl<C: ?Sized, S: Scorer<C>> Explorer<C> for Softmax<S> {
    fn num_actions(&self) -> u32 {
        self.cfg.num_actions
    }

    fn choose_action(
        &self,
        context: &C,
        seed: &DecisionSeed,
    ) -> Result<Selection, SelectionError> {
        let probs = self.probabilities(context)?;
        select(&probs, seed.draw(DrawDomain::Softmax), self.cfg.num_actions)
    }
}

/// Inverse-CDF pick from `probs` at draw `r`, with the logged probability of the pick.
fn select(probs: &[f64], r: f64, num_actions: u32) -> Result<Selection, SelectionError> {
    // A validated, finite score vector always has at least one positive entry.
    let (idx, fell_through) = sample_index(probs, r).unwrap_or((probs.len() - 1, true));
    let action = check_action(idx as u32, num_actions)?;
    let note = if fell_through {
        ExplorationNote::NumericalFallbackToLastAction
    } else {
        ExplorationNote::SampledFromDistribution
    };
    // Rounding to f32 must not produce a zero propensity.
    let probability = (probs[idx] as f32).clamp(f32::MIN_POSITIVE, 1.0);
    Ok(Selection::new(action, probability, note))
}
