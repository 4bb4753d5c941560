//! `mwt`: deterministic exploration with propensity logging for multi-world testing.
//!
//! Every decision is served as `(context, action, probability, key)`: the action played, and the
//! exact probability it was played with. Logging that probability is what lets an offline
//! evaluator score a *different* policy on the same log by importance weighting, so serving and
//! counterfactual evaluation share one format.
//!
//! **Goals:**
//! - **Deterministic**: a decision is a pure function of `(decision key, app id, explorer
//!   configuration, context)`. No clock, no OS entropy, no hidden RNG state; any decision can be
//!   recomputed offline from its log line.
//! - **Exact propensities**: the logged probability is the true marginal probability of the
//!   logged action, never zero.
//! - **One record per decision**: the recorder sees every successful selection exactly once,
//!   verbatim, and recorder failures are reported separately from selection failures.
//!
//! **Pieces:**
//! - [`stable_hash64`] / [`DecisionSeed`]: the only source of randomness. Draws are separated
//!   by [`DrawDomain`] so the explore/exploit draw and the uniform-action draw never share bits.
//! - [`Explorer`]: the strategy seam. [`EpsilonGreedy`] wraps a [`Policy`], [`Softmax`] wraps a
//!   [`Scorer`], [`Bootstrap`] wraps an ensemble of policies.
//! - [`Mwt`]: the engine. Select, record once via a [`Recorder`], return the action.
//! - [`TextRecorder`] / [`MemoryRecorder`]: default recorders.
//!
//! **Non-goals:**
//! - Not a learner: nothing here updates a policy.
//! - Not an evaluator: offline estimation lives with whoever reads the log.
//! - No storage or wire protocol beyond the documented text line.
//!
//! # Example
//!
//! ```rust
//! use mwt::{EpsilonGreedy, EpsilonGreedyConfig, Mwt, MwtConfig, TextRecorder};
//!
//! let mwt = Mwt::new(MwtConfig::new("app"), TextRecorder::<str, _>::in_memory());
//! let explorer = EpsilonGreedy::new(
//!     EpsilonGreedyConfig { epsilon: 0.5, num_actions: 2 },
//!     |_: &str| 1u32,
//! )
//! .unwrap();
//!
//! let action = mwt.choose_action(&explorer, "user=7", "k1").unwrap();
//! // Same key, same answer.
//! assert_eq!(action, mwt.choose_action(&explorer, "user=7", "k1").unwrap());
//!
//! let log = mwt.recorder().recording();
//! assert!(log.starts_with("user=7\t"));
//! ```
//!
//! # Logging
//!
//! The engine emits `tracing` events: `debug` for each recorded decision and for explorer
//! construction, `warn` when a decision was made but the recorder failed. Install any
//! subscriber to see them.

#![forbid(unsafe_code)]

mod error;
pub use error::*;

mod stable_hash;
pub use stable_hash::*;

mod seed;
pub use seed::*;

mod alloc;
pub use alloc::*;

mod config;
pub use config::*;

mod decision;
pub use decision::*;

mod policy;
pub use policy::*;

mod explorer;
pub use explorer::Explorer;

mod epsilon_greedy;
pub use epsilon_greedy::*;

mod softmax;
pub use softmax::*;

mod bootstrap;
pub use bootstrap::*;

mod recorder;
pub use recorder::*;

mod engine;
pub use engine::*;
