use serde::{Deserialize, Serialize};
use crate::matchup::PairingStrategy;
use crate::{Error, Result};

/// Number of votes returned by `recent_votes` when no usable limit is given
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Configuration for a ranking engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_recent_limit")]
    pub default_recent_limit: usize,
    #[serde(default)]
    pub pairing: PairingStrategy,
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_recent_limit: DEFAULT_RECENT_LIMIT,
            pairing: PairingStrategy::Uniform,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_recent_limit == 0 {
            return Err(Error::InvalidInput(
                "default recent-vote limit must be at least 1".to_string(),
            ));
        }
        self.pairing.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_uniform_pairing() {
        let config = EngineConfig::default();
        assert_eq!(config.pairing, PairingStrategy::Uniform);
        assert_eq!(config.default_recent_limit, DEFAULT_RECENT_LIMIT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_recent_limit_rejected() {
        let config = EngineConfig {
            default_recent_limit: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidInput(_))));
    }
}
