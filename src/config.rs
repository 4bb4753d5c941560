//! Construction-time configuration.
//!
//! Everything here is validated once, when a strategy or engine is built, and is immutable
//! afterwards. Loading these from files or flags is the embedding application's job; with the
//! `serde` feature they (de)serialize from any serde format.

use crate::ConfigError;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MwtConfig {
    /// Application identifier, used as the salt of every decision seed.
    ///
    /// Changing it changes every draw, so keep it stable for the lifetime of a log.
    pub app_id: String,
}

impl MwtConfig {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
        }
    }
}

/// Epsilon-greedy configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpsilonGreedyConfig {
    /// Probability mass spread uniformly over all actions, in `[0, 1]`.
    pub epsilon: f32,
    pub num_actions: u32,
}

impl EpsilonGreedyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_actions == 0 {
            return Err(ConfigError::NoActions);
        }
        if !self.epsilon.is_finite() || !(0.0..=1.0).contains(&self.epsilon) {
            return Err(ConfigError::EpsilonOutOfRange(self.epsilon));
        }
        Ok(())
    }
}

/// Softmax configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoftmaxConfig {
    /// Temperature (must be finite and > 0). Smaller is greedier.
    pub lambda: f32,
    pub num_actions: u32,
}

impl SoftmaxConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_actions == 0 {
            return Err(ConfigError::NoActions);
        }
        if !self.lambda.is_finite() || self.lambda <= 0.0 {
            return Err(ConfigError::LambdaNotPositive(self.lambda));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilon_bounds() {
        let ok = |epsilon| EpsilonGreedyConfig {
            epsilon,
            num_actions: 3,
        }
        .validate();
        assert!(ok(0.0).is_ok());
        assert!(ok(1.0).is_ok());
        assert_eq!(ok(-0.1), Err(ConfigError::EpsilonOutOfRange(-0.1)));
        assert_eq!(ok(1.01), Err(ConfigError::EpsilonOutOfRange(1.01)));
        assert!(matches!(ok(f32::NAN), Err(ConfigError::EpsilonOutOfRange(_))));
    }

    #[test]
    fn zero_actions_is_rejected_first() {
        let cfg = EpsilonGreedyConfig {
            epsilon: 7.0,
            num_actions: 0,
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NoActions));
        let cfg = SoftmaxConfig {
            lambda: 1.0,
            num_actions: 0,
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NoActions));
    }

    #[test]
    fn lambda_must_be_positive() {
        for lambda in [0.0, -1.0, f32::INFINITY, f32::NAN] {
            let cfg = SoftmaxConfig {
                lambda,
                num_actions: 2,
            };
            assert!(
                matches!(cfg.validate(), Err(ConfigError::LambdaNotPositive(_))),
                "lambda={lambda}"
            );
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn configs_deserialize() {
        let cfg: EpsilonGreedyConfig =
            serde_json::from_str(r#"{"epsilon":0.2,"num_actions":4}"#).unwrap();
        assert_eq!(cfg.num_actions, 4);
        assert!(cfg.validate().is_ok());
        let cfg: MwtConfig = serde_json::from_str(r#"{"app_id":"app"}"#).unwrap();
        assert_eq!(cfg, MwtConfig::new("app"));
    }
}
