//! Core data types for partial moment calculations.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Which side of the threshold a partial moment measures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Shortfall below the threshold (lower partial moment)
    Lower,
    /// Excess above the threshold (higher partial moment)
    Higher,
}

impl Side {
    /// Clipped deviation of `value` from `threshold` on this side.
    ///
    /// Always non-negative; `0.0` when the value sits on the other side.
    #[inline]
    pub fn deviation(self, value: f64, threshold: f64) -> f64 {
        match self {
            Side::Lower => (threshold - value).max(0.0),
            Side::Higher => (value - threshold).max(0.0),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Lower => write!(f, "lower"),
            Side::Higher => write!(f, "higher"),
        }
    }
}

/// What to do when the downside deviation of a series is exactly zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZeroDeviationPolicy {
    /// Fail with [`crate::Error::NoDownside`]
    #[default]
    Error,
    /// Divide anyway and return the IEEE result: +Inf for positive growth,
    /// NaN for periods where the cumulative growth is exactly zero
    Infinity,
}

/// Parameters for the Sortino trajectory.
///
/// Missing fields fall back to the defaults when deserialized:
///
/// ```rust
/// use moments_core::{SortinoConfig, ZeroDeviationPolicy};
///
/// let config = SortinoConfig::from_json(r#"{ "threshold": 0.001 }"#).unwrap();
/// assert_eq!(config.threshold, 0.001);
/// assert_eq!(config.order, 2.0);
/// assert_eq!(config.zero_deviation, ZeroDeviationPolicy::Error);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SortinoConfig {
    /// Minimum acceptable return per period
    pub threshold: f64,
    /// Lower partial moment order under the square root
    pub order: f64,
    /// Handling of a zero downside deviation
    pub zero_deviation: ZeroDeviationPolicy,
}

impl Default for SortinoConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            order: 2.0,
            zero_deviation: ZeroDeviationPolicy::Error,
        }
    }
}

impl SortinoConfig {
    /// Create a config with the default threshold (0.0) and order (2).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_order(mut self, order: f64) -> Self {
        self.order = order;
        self
    }

    pub fn with_zero_deviation(mut self, policy: ZeroDeviationPolicy) -> Self {
        self.zero_deviation = policy;
        self
    }
}

/// Partial-moment summary of a single return series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MomentMetrics {
    /// Threshold the moments were measured against
    pub threshold: f64,
    /// Number of periods in the series
    pub periods: usize,
    /// Lower partial moment, order 1 (mean shortfall)
    pub lpm1: f64,
    /// Lower partial moment, order 2
    pub lpm2: f64,
    /// Higher partial moment, order 1 (mean excess)
    pub hpm1: f64,
    /// Higher partial moment, order 2
    pub hpm2: f64,
    /// Square root of `lpm2`
    pub downside_deviation: f64,
    /// Square root of `hpm2`
    pub upside_deviation: f64,
    /// `hpm1 / lpm1`, if any return falls below the threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub omega_ratio: Option<f64>,
    /// `hpm1 / sqrt(lpm2)`, if any return falls below the threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upside_potential_ratio: Option<f64>,
    /// Compounded return over the whole series (0.05 for +5%)
    pub total_return: f64,
    /// Last element of the Sortino trajectory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_sortino: Option<f64>,
}
