//! Engine configuration.
//!
//! This module provides [`EngineConfig`] for configuring the policy data
//! source endpoint and how out-of-range company percentages are handled.
//! Configuration is read from a YAML file; the defaults require no file
//! at all.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

/// Default policy endpoint queried when no configuration file overrides it.
pub const DEFAULT_POLICY_URL: &str =
    "https://dn8mlk7hdujby.cloudfront.net/interview/insurance/policy";

/// How a `company_percentage` outside [0, 100] is treated.
///
/// The source document is not validated upstream, so out-of-range values
/// can and do arrive. `PassThrough` reproduces the original arithmetic
/// propagation (a worker share can go negative); the other modes exist for
/// deployments that prefer saturation or a structured rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentageHandling {
    /// Use the value as-is, letting out-of-range values propagate.
    #[default]
    PassThrough,
    /// Saturate the value into [0, 100].
    Clamp,
    /// Fail the request with an invalid-percentage error.
    Reject,
}

impl PercentageHandling {
    /// Resolves the effective percentage for a raw document value.
    ///
    /// # Examples
    ///
    /// ```
    /// use policy_engine::config::PercentageHandling;
    ///
    /// assert_eq!(PercentageHandling::PassThrough.resolve(130.0).unwrap(), 130.0);
    /// assert_eq!(PercentageHandling::Clamp.resolve(130.0).unwrap(), 100.0);
    /// assert!(PercentageHandling::Reject.resolve(130.0).is_err());
    /// ```
    pub fn resolve(&self, raw: f64) -> EngineResult<f64> {
        match self {
            PercentageHandling::PassThrough => Ok(raw),
            PercentageHandling::Clamp => Ok(raw.clamp(0.0, 100.0)),
            PercentageHandling::Reject => {
                if (0.0..=100.0).contains(&raw) {
                    Ok(raw)
                } else {
                    Err(EngineError::InvalidPercentage { value: raw })
                }
            }
        }
    }
}

/// Configuration for the policy cost engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// The fully-qualified URL of the policy document endpoint.
    pub policy_url: String,
    /// Handling of company percentages outside [0, 100].
    pub percentage_handling: PercentageHandling,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            policy_url: DEFAULT_POLICY_URL.to_string(),
            percentage_handling: PercentageHandling::default(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a YAML file.
    ///
    /// Fields absent from the file keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file cannot be read,
    /// or [`EngineError::ConfigParseError`] if it is not valid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
