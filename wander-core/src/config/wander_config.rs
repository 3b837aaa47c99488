//! Top-level rule tables with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    default_tag_rules, AmenityConfig, BrandConfig, CurrencyConfig, DiversityConfig, GateConfig,
    KeywordConfig, LocationConfig, ScoringConfig, TagRule,
};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Tolerance around 1.0 before a weight sum is reported.
const WEIGHT_SUM_TOLERANCE: f64 = 0.05;

/// Every tunable input of the curation pipeline.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`WANDER_*`)
/// 2. Config file (`wander.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WanderConfig {
    pub brands: BrandConfig,
    pub keywords: KeywordConfig,
    pub amenities: AmenityConfig,
    pub tag_rules: Vec<TagRule>,
    pub scoring: ScoringConfig,
    pub gates: GateConfig,
    pub currency: CurrencyConfig,
    pub locations: LocationConfig,
    pub diversity: DiversityConfig,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            brands: BrandConfig::default(),
            keywords: KeywordConfig::default(),
            amenities: AmenityConfig::default(),
            tag_rules: default_tag_rules(),
            scoring: ScoringConfig::default(),
            gates: GateConfig::default(),
            currency: CurrencyConfig::default(),
            locations: LocationConfig::default(),
            diversity: DiversityConfig::default(),
        }
    }
}

impl WanderConfig {
    /// Load rule tables: defaults, then `path` (or `./wander.toml` when no path
    /// is given and that file exists), then `WANDER_*` overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_resolved(Some(path.to_path_buf())),
            None => Self::load_resolved(discover(Path::new("."))),
        }
    }

    /// Like [`WanderConfig::load`] with no explicit path, looking for
    /// `wander.toml` in `dir` instead of the working directory.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        Self::load_resolved(discover(dir))
    }

    fn load_resolved(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match &path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides()?;
        config.validate()?;

        tracing::debug!(
            file = ?path.as_ref().map(|p| p.display().to_string()),
            min_score = config.scoring.min_score,
            "rule tables loaded"
        );
        Ok(config)
    }

    /// Parse a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize to TOML, e.g. to write out a starter `wander.toml`.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "<root>".to_string(),
            message: e.to_string(),
        })
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(v) = env_f64("WANDER_MIN_SCORE")? {
            self.scoring.min_score = v;
        }
        if let Some(v) = env_f64("WANDER_MIN_RATING")? {
            self.gates.min_rating = v;
        }
        if let Some(v) = env_f64("WANDER_MAX_PRICE")? {
            self.gates.max_price = v;
        }
        if let Ok(raw) = std::env::var("WANDER_MIN_PHOTOS") {
            self.gates.min_photos =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        field: "WANDER_MIN_PHOTOS".to_string(),
                        message: format!("expected a non-negative integer, got {raw:?}"),
                    })?;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, weight) in self.scoring.weights.entries() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: format!("scoring.weights.{name}"),
                    message: "must be a finite, non-negative number".to_string(),
                });
            }
        }
        let sum = self.scoring.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            tracing::warn!(sum, "scoring weights do not sum to 1.0");
        }

        if !self.scoring.min_score.is_finite() || self.scoring.min_score < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.min_score".to_string(),
                message: "must be a finite, non-negative number".to_string(),
            });
        }
        if self
            .scoring
            .price_tiers
            .iter()
            .any(|t| !t.above.is_finite() || !t.penalty.is_finite() || t.penalty > 0.0)
        {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.price_tiers".to_string(),
                message: "thresholds must be finite and penalties must be <= 0".to_string(),
            });
        }
        if self
            .scoring
            .rating_steps
            .iter()
            .any(|s| !s.min.is_finite() || !s.score.is_finite())
        {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.rating_steps".to_string(),
                message: "must be finite".to_string(),
            });
        }

        if self.gates.min_photos == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "gates.min_photos".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !self.gates.min_rating.is_finite() || !(0.0..=10.0).contains(&self.gates.min_rating) {
            return Err(ConfigError::ValidationFailed {
                field: "gates.min_rating".to_string(),
                message: "must be between 0.0 and 10.0".to_string(),
            });
        }
        if !self.gates.max_price.is_finite() || self.gates.max_price <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "gates.max_price".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if !self.currency.unknown_rate.is_finite() || self.currency.unknown_rate <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "currency.unknown_rate".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some((code, _)) = self
            .currency
            .rates
            .iter()
            .find(|(_, rate)| !rate.is_finite() || **rate <= 0.0)
        {
            return Err(ConfigError::ValidationFailed {
                field: format!("currency.rates.{code}"),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.diversity.max_consecutive == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "diversity.max_consecutive".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let cutoffs = &self.diversity.tier_cutoffs;
        if cutoffs.iter().any(|c| !c.is_finite()) || cutoffs.windows(2).any(|w| w[0] <= w[1]) {
            return Err(ConfigError::ValidationFailed {
                field: "diversity.tier_cutoffs".to_string(),
                message: "must be finite and strictly descending".to_string(),
            });
        }

        if let Some(rule) = self.tag_rules.iter().find(|r| r.variants.is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: format!("tag_rules.{}", rule.name),
                message: "must declare at least one variant".to_string(),
            });
        }

        Ok(())
    }
}

fn env_f64(key: &str) -> Result<Option<f64>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                field: key.to_string(),
                message: format!("expected a number, got {raw:?}"),
            }),
        Err(_) => Ok(None),
    }
}

/// `dir/wander.toml`, if it exists.
fn discover(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}
