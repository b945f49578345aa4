use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How a detection picks among several live tracks within range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationPolicy {
    /// First track in iteration order under the threshold wins.
    #[default]
    FirstFit,
    /// Closest track under the threshold wins.
    NearestFit,
}

/// Configuration for the CentroidTracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Updates a track may go unmatched before it is dropped
    pub max_age: u32,
    /// Centroid distance below which a detection continues a track
    pub match_distance: f32,
    pub policy: AssociationPolicy,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_age: 30,
            match_distance: 100.0,
            policy: AssociationPolicy::FirstFit,
        }
    }
}

impl TrackerConfig {
    pub fn with_max_age(mut self, max_age: u32) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn with_match_distance(mut self, match_distance: f32) -> Self {
        self.match_distance = match_distance;
        self
    }

    pub fn with_policy(mut self, policy: AssociationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_age == 0 {
            return Err(Error::InvalidConfig("max_age must be at least 1".into()));
        }
        if !self.match_distance.is_finite() || self.match_distance < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "match_distance must be a finite non-negative number, got {}",
                self.match_distance
            )));
        }
        Ok(())
    }
}
