//! Bootstrap exploration over an ensemble of policies ("bags").
//!
//! One bag is followed per decision, chosen uniformly from the seed. Every bag is consulted so
//! the logged probability is the exact share of bags that vote for the played action.

use crate::explorer::check_action;
use crate::{
    ConfigError, DecisionSeed, DrawDomain, ExplorationNote, Explorer, Policy, Selection,
    SelectionError,
};

/// Bootstrap strategy.
#[derive(Debug, Clone)]
pub struct Bootstrap<P> {
    num_actions: u32,
    bags: Vec<P>,
}

impl<P> Bootstrap<P> {
    pub fn new(num_actions: u32, bags: Vec<P>) -> Result<Self, ConfigError> {
        if num_actions == 0 {
            return Err(ConfigError::NoActions);
        }
        if bags.is_empty() {
            return Err(ConfigError::NoBags);
        }
        tracing::debug!(num_actions, bags = bags.len(), "bootstrap explorer configured");
        Ok(Self { num_actions, bags })
    }

    pub fn bags(&self) -> &[P] {
        &self.bags
    }
}

impl<C: ?Sized, P: Policy<C>> Explorer<C> for Bootstrap<P> {
    fn num_actions(&self) -> u32 {
        self.num_actions
    }

    fn choose_action(
        &self,
        context: &C,
        seed: &DecisionSeed,
    ) -> Result<Selection, SelectionError> {
        let votes = self
            .bags
            .iter()
            .map(|bag| check_action(bag.choose_action(context), self.num_actions))
            .collect::<Result<Vec<u32>, _>>()?;

        let bag = seed.pick(DrawDomain::Bootstrap, votes.len() as u32);
        let action = votes[bag as usize];
        let agreeing = votes.iter().filter(|&&v| v == action).count();
        let probability = agreeing as f32 / votes.len() as f32;
        Ok(Selection::new(
            action,
            probability,
            ExplorationNote::Bag { index: bag },
        ))
    }
}
