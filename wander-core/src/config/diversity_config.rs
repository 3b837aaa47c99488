use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_CONSECUTIVE_RUN;

/// Which reordering the diversifier applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiversityPolicy {
    /// Greedy bucket shuffle over the whole list.
    #[default]
    Basic,
    /// Bucket shuffle within score tiers, tiers concatenated high to low.
    Tiered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiversityConfig {
    pub policy: DiversityPolicy,
    /// Longest allowed run of the same city or brand.
    pub max_consecutive: usize,
    /// Descending score cutoffs separating tiers. `[0.6, 0.45]` makes three tiers:
    /// `>= 0.6`, `[0.45, 0.6)`, and `< 0.45`.
    pub tier_cutoffs: Vec<f64>,
}

impl Default for DiversityConfig {
    fn default() -> Self {
        Self {
            policy: DiversityPolicy::Basic,
            max_consecutive: MAX_CONSECUTIVE_RUN,
            tier_cutoffs: defaults::DEFAULT_TIER_CUTOFFS.to_vec(),
        }
    }
}
