//! Configuration system for TourForge.
//!
//! Load solver configuration from TOML or YAML files to control the time
//! budget, the random seed and the perturbation strategy without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use tourforge_config::SolverConfig;
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!
//!     [perturbation]
//!     max_draws = 500
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert_eq!(config.perturbation.max_draws, 500);
//! assert_eq!(config.perturbation.restart_swaps, 100_000);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use tourforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of draws before the perturbation gives up and restarts.
pub const DEFAULT_MAX_DRAWS: usize = 1000;

/// Default number of random swaps applied to a restarted tour.
pub const DEFAULT_RESTART_SWAPS: usize = 100_000;

/// Default margin kept between the last sweep and the time budget.
pub const DEFAULT_SAFETY_MARGIN_MILLIS: u64 = 500;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Perturbation and restart configuration.
    #[serde(default)]
    pub perturbation: PerturbationConfig,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: f64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the perturbation configuration.
    pub fn with_perturbation(mut self, perturbation: PerturbationConfig) -> Self {
        self.perturbation = perturbation;
        self
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(termination) = &self.termination {
            termination.validate()?;
        }
        self.perturbation.validate()
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tourforge_config::SolverConfig;
    /// use std::time::Duration;
    ///
    /// let config = SolverConfig::new().with_termination_seconds(1.5);
    /// assert_eq!(config.time_limit(), Some(Duration::from_millis(1500)));
    /// ```
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the margin kept before the time limit.
    pub fn safety_margin(&self) -> Duration {
        self.termination
            .as_ref()
            .map(|t| t.safety_margin())
            .unwrap_or(Duration::from_millis(DEFAULT_SAFETY_MARGIN_MILLIS))
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<f64>,

    /// Milliseconds subtracted from the limit so the last sweep ends in time.
    pub safety_margin_millis: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    ///
    /// Invalid limits yield `None`; [`SolverConfig::validate`] reports them.
    pub fn time_limit(&self) -> Option<Duration> {
        self.seconds_spent_limit
            .and_then(|s| Duration::try_from_secs_f64(s).ok())
    }

    /// Returns the safety margin as a Duration.
    pub fn safety_margin(&self) -> Duration {
        Duration::from_millis(
            self.safety_margin_millis
                .unwrap_or(DEFAULT_SAFETY_MARGIN_MILLIS),
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.seconds_spent_limit {
            Some(s) if Duration::try_from_secs_f64(s).is_err() => {
                Err(ConfigError::Invalid(format!(
                    "seconds_spent_limit must be a non-negative number of seconds \
                     that fits a Duration, got {s}"
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Perturbation configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PerturbationConfig {
    /// Random draws allowed to find an untried transposition.
    pub max_draws: usize,

    /// Random swaps applied to the rebuilt tour on restart.
    pub restart_swaps: usize,

    /// Forget tried transpositions whenever a new best tour is found.
    pub clear_tried_on_improvement: bool,
}

impl Default for PerturbationConfig {
    fn default() -> Self {
        Self {
            max_draws: DEFAULT_MAX_DRAWS,
            restart_swaps: DEFAULT_RESTART_SWAPS,
            clear_tried_on_improvement: false,
        }
    }
}

impl PerturbationConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_draws == 0 {
            return Err(ConfigError::Invalid(
                "perturbation.max_draws must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
