//! The strategy seam of the engine.

use crate::{DecisionSeed, Selection, SelectionError};

/// An exploration strategy: given a context and a decision seed, pick an action and report
/// the exact probability it was picked with.
///
/// Implementations must be pure functions of `(configuration, context, seed)`: any randomness
/// comes from `seed` and nothing else. [`EpsilonGreedy`](crate::EpsilonGreedy),
/// [`Softmax`](crate::Softmax) and [`Bootstrap`](crate::Bootstrap) are provided; new
/// strategies only need to implement this trait to be usable with [`Mwt`](crate::Mwt).
pub trait Explorer<C: ?Sized> {
    /// Size of the action space, fixed at construction.
    fn num_actions(&self) -> u32;

    /// Select an action. The returned probability must lie in `(0, 1]`.
    fn choose_action(
        &self,
        context: &C,
        seed: &DecisionSeed,
    ) -> Result<Selection, SelectionError>;
}

impl<C: ?Sized, E: Explorer<C> + ?Sized> Explorer<C> for &E {
    fn num_actions(&self) -> u32 {
        (**self).num_actions()
    }

    fn choose_action(
        &self,
        context: &C,
        seed: &DecisionSeed,
    ) -> Result<Selection, SelectionError> {
        (**self).choose_action(context, seed)
    }
}

impl<C: ?Sized, E: Explorer<C> + ?Sized> Explorer<C> for Box<E> {
    fn num_actions(&self) -> u32 {
        (**self).num_actions()
    }

    fn choose_action(
        &self,
        context: &C,
        seed: &DecisionSeed,
    ) -> Result<Selection, SelectionError> {
        (**self).choose_action(context, seed)
    }
}

/// Check a policy/bag action against the action space.
pub(crate) fn check_action(action: u32, num_actions: u32) -> Result<u32, SelectionError> {
    if action < num_actions {
        Ok(action)
    } else {
        Err(SelectionError::ActionOutOfRange {
            action,
            num_actions,
        })
    }
}
