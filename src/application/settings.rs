//! Run settings - the slice of `Config` the controller needs

use crate::config::Config;
use crate::domain::entities::ArtifactKind;
use crate::domain::ports::DeployOptions;
use crate::domain::value_objects::IntervalBounds;
use crate::error::RandeployResult;

/// Read-only settings for one controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub kinds: Vec<ArtifactKind>,
    pub deploy: DeployOptions,
    pub interval: IntervalBounds,
}

impl RunSettings {
    pub fn from_config(config: &Config) -> RandeployResult<Self> {
        Ok(Self {
            kinds: config.enabled_kinds(),
            deploy: config.deploy_options(),
            interval: config.interval()?,
        })
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            kinds: ArtifactKind::ALL.to_vec(),
            deploy: DeployOptions::default(),
            interval: IntervalBounds::default(),
        }
    }
}
