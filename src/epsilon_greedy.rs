//! Epsilon-greedy exploration around a caller-supplied policy.
//!
//! With probability `1 - epsilon` the policy's action is played; otherwise an action is drawn
//! uniformly. The logged probability is always the marginal probability of the chosen action
//! under that mixture, so a uniform pick that lands on the policy action is logged with the
//! exploit probability.

use crate::explorer::check_action;
use crate::{
    ConfigError, DecisionSeed, DrawDomain, EpsilonGreedyConfig, ExplorationNote, Explorer,
    Policy, Selection, SelectionError,
};

/// Epsilon-greedy strategy.
#[derive(Debug, Clone)]
pub struct EpsilonGreedy<P> {
    cfg: EpsilonGreedyConfig,
    policy: P,
    exploit_probability: f32,
    explore_probability: f32,
}

impl<P> EpsilonGreedy<P> {
    pub fn new(cfg: EpsilonGreedyConfig, policy: P) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let n = cfg.num_actions as f32;
        let explore_probability = cfg.epsilon / n;
        let exploit_probability = 1.0 - cfg.epsilon + explore_probability;
        tracing::debug!(
            epsilon = cfg.epsilon,
            num_actions = cfg.num_actions,
            "epsilon-greedy explorer configured"
        );
        Ok(Self {
            cfg,
            policy,
            exploit_probability,
            explore_probability,
        })
    }

    pub fn config(&self) -> EpsilonGreedyConfig {
        self.cfg
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Probability logged whenever the policy's action is played: `1 - ε + ε/n`.
    pub fn exploit_probability(&self) -> f32 {
        self.exploit_probability
    }

    /// Probability logged for any other action: `ε/n`.
    pub fn explore_probability(&self) -> f32 {
        self.explore_probability
    }
}

impl<C: ?Sized, P: Policy<C>> Explorer<C> for EpsilonGreedy<P> {
    fn num_actions(&self) -> u32 {
        self.cfg.num_actions
    }

    fn choose_action(
        &self,
        context: &C,
        seed: &DecisionSeed,
    ) -> Result<Selection, SelectionError> {
        let greedy = check_action(self.policy.choose_action(context), self.cfg.num_actions)?;

        if seed.draw(DrawDomain::Explore) >= self.cfg.epsilon as f64 {
            return Ok(Selection::new(
                greedy,
                self.exploit_probability,
                ExplorationNote::Exploit,
            ));
        }

        let action = seed.pick(DrawDomain::Uniform, self.cfg.num_actions);
        let matched_policy = action == greedy;
        let probability = if matched_policy {
            self.exploit_probability
        } else {
            self.explore_probability
        };
        Ok(Selection::new(
            action,
            probability,
            ExplorationNote::Explore { matched_policy },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn eg(epsilon: f32, num_actions: u32, action: u32) -> EpsilonGreedy<impl Fn(&str) -> u32> {
        EpsilonGreedy::new(
            EpsilonGreedyConfig {
                epsilon,
                num_actions,
            },
            move |_: &str| action,
        )
        .unwrap()
    }

    #[test]
    fn epsilon_zero_always_exploits() {
        let e = eg(0.0, 4, 2);
        for i in 0..200 {
            let key = format!("k{i}");
            let s = e.choose_action("ctx", &DecisionSeed::new(&key, "app")).unwrap();
            assert_eq!(s.action, 2);
            assert_eq!(s.probability, 1.0);
            assert_eq!(s.note, ExplorationNote::Exploit);
        }
    }

    #[test]
    fn epsilon_one_is_uniform() {
        let e = eg(1.0, 4, 2);
        for i in 0..200 {
            let key = format!("k{i}");
            let s = e.choose_action("ctx", &DecisionSeed::new(&key, "app")).unwrap();
            assert_eq!(s.probability, 0.25);
            assert!(matches!(s.note, ExplorationNote::Explore { .. }));
        }
    }

    #[test]
    fn out_of_range_policy_action_fails() {
        let e = eg(0.3, 3, 3);
        let err = e
            .choose_action("ctx", &DecisionSeed::new("k", "app"))
            .unwrap_err();
        assert_eq!(
            err,
            SelectionError::ActionOutOfRange {
                action: 3,
                num_actions: 3
            }
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let r = EpsilonGreedy::new(
            EpsilonGreedyConfig {
                epsilon: 1.5,
                num_actions: 2,
            },
            |_: &str| 0u32,
        );
        assert!(matches!(r, Err(ConfigError::EpsilonOutOfRange(_))));
    }

    proptest! {
        #[test]
        fn probability_is_one_of_two_values(
            epsilon in 0.0f32..=1.0,
            num_actions in 1u32..16,
            greedy_seed in any::<u32>(),
            key in "[a-z0-9]{1,16}",
        ) {
            let greedy = greedy_seed % num_actions;
            let e = eg(epsilon, num_actions, greedy);
            let seed = DecisionSeed::new(&key, "app");
            let s = e.choose_action("ctx", &seed).unwrap();
            prop_assert!(s.action < num_actions);
            prop_assert!(s.probability > 0.0 && s.probability <= 1.0);
            if s.action == greedy {
                prop_assert_eq!(s.probability, e.exploit_probability());
            } else {
                prop_assert_eq!(s.probability, e.explore_probability());
            }

            // Recomputed, not cached: same inputs, same answer.
            let again = e.choose_action("ctx", &seed).unwrap();
            prop_assert_eq!(s, again);
        }
    }
}
