//! The decision engine.
//!
//! [`Mwt`] ties an explorer, a context and a recorder together into exactly one recorded
//! decision: select, record once, return the action. It holds nothing mutable, so one instance
//! can serve concurrent callers as long as the collaborators allow it.

use crate::{
    Decision, DecisionRecord, DecisionSeed, Explorer, MwtConfig, MwtError, Recorder, Selection,
    SelectionError,
};

/// Multi-world-testing decision engine.
///
/// # Example
///
/// ```rust
/// use mwt::{EpsilonGreedy, EpsilonGreedyConfig, MemoryRecorder, Mwt, MwtConfig};
///
/// let mwt = Mwt::new(MwtConfig::new("app"), MemoryRecorder::<String>::new());
/// let explorer = EpsilonGreedy::new(
///     EpsilonGreedyConfig { epsilon: 0.1, num_actions: 3 },
///     |_: &String| 1u32,
/// )
/// .unwrap();
///
/// let action = mwt
///     .choose_action(&explorer, &"user=42".to_string(), "evt-1")
///     .unwrap();
/// assert!(action < 3);
/// assert_eq!(mwt.recorder().decisions()[0].action, action);
/// ```
#[derive(Debug, Clone)]
pub struct Mwt<R> {
    cfg: MwtConfig,
    recorder: R,
}

impl<R> Mwt<R> {
    pub fn new(cfg: MwtConfig, recorder: R) -> Self {
        Self { cfg, recorder }
    }

    /// Salt mixed into every decision seed.
    pub fn app_id(&self) -> &str {
        &self.cfg.app_id
    }

    pub fn config(&self) -> &MwtConfig {
        &self.cfg
    }

    pub fn recorder(&self) -> &R {
        &self.recorder
    }

    pub fn into_recorder(self) -> R {
        self.recorder
    }

    /// Choose an action for `context` under `explorer`, record it, and return it.
    ///
    /// - Selection failures return [`MwtError::Selection`]; nothing is recorded.
    /// - Recorder failures return [`MwtError::Record`]; the action was decided but not logged.
    ///
    /// The same `(key, app_id, explorer, context)` always yields the same action.
    pub fn choose_action<C, E>(&self, explorer: &E, context: &C, key: &str) -> Result<u32, MwtError>
    where
        C: ?Sized,
        E: Explorer<C> + ?Sized,
        R: Recorder<C>,
    {
        self.decide(explorer, context, key).map(|s| s.action)
    }

    /// Like [`Mwt::choose_action`], returning the full recorded decision.
    pub fn choose_action_explain<C, E>(
        &self,
        explorer: &E,
        context: &C,
        key: &str,
    ) -> Result<Decision, MwtError>
    where
        C: ?Sized,
        E: Explorer<C> + ?Sized,
        R: Recorder<C>,
    {
        let s = self.decide(explorer, context, key)?;
        Ok(Decision {
            key: key.to_string(),
            action: s.action,
            probability: s.probability,
            note: s.note,
        })
    }

    fn decide<C, E>(&self, explorer: &E, context: &C, key: &str) -> Result<Selection, MwtError>
    where
        C: ?Sized,
        E: Explorer<C> + ?Sized,
        R: Recorder<C>,
    {
        let seed = DecisionSeed::new(key, &self.cfg.app_id);
        let selection = explorer
            .choose_action(context, &seed)
            .and_then(|s| validate(s, explorer.num_actions()))
            .map_err(|err| {
                tracing::debug!(key, error = %err, "action selection failed");
                err
            })?;

        let record = DecisionRecord {
            context,
            action: selection.action,
            probability: selection.probability,
            key,
        };
        if let Err(source) = self.recorder.record(&record) {
            tracing::warn!(
                key,
                action = selection.action,
                probability = selection.probability,
                error = %source,
                "decision made but not recorded"
            );
            return Err(MwtError::Record {
                key: key.to_string(),
                action: selection.action,
                probability: selection.probability,
                source,
            });
        }

        tracing::debug!(
            key,
            action = selection.action,
            probability = selection.probability,
            note = ?selection.note,
            "decision recorded"
        );
        Ok(selection)
    }
}

/// Explorers outside this crate are held to the same contract as the built-in ones.
fn validate(s: Selection, num_actions: u32) -> Result<Selection, SelectionError> {
    if s.action >= num_actions {
        return Err(SelectionError::ActionOutOfRange {
            action: s.action,
            num_actions,
        });
    }
    if !(s.probability > 0.0 && s.probability <= 1.0) {
        return Err(SelectionError::ProbabilityOutOfRange {
            action: s.action,
            probability: s.probability,
        });
    }
    Ok(s)
}
