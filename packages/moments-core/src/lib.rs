//! Moments Core - Partial moment statistics for periodic return series.
//!
//! This crate provides downside/upside risk statistics for a strategy's
//! historical returns:
//!
//! - **Partial moments**: lower (downside) and higher (upside) partial moments
//! - **Sortino trajectory**: cumulative compounded return over downside deviation
//! - **Partial-moment ratios**: Omega ratio, upside potential ratio
//! - **Growth helpers**: growth factors and cumulative returns
//!
//! Returns are fractional per-period values (`0.0053` for +0.53%).
//!
//! # Example
//!
//! ```rust
//! use moments_core::{lower_partial_moment, sortino};
//!
//! let returns = [0.01, -0.02, 0.03, -0.01];
//!
//! let lpm = lower_partial_moment(&returns, 0.0, 2.0).unwrap();
//! assert!((lpm - 0.000125).abs() < 1e-12);
//!
//! // One risk-adjusted cumulative return per period
//! let trajectory = sortino(&returns, 0.0, 2.0).unwrap();
//! assert_eq!(trajectory.len(), returns.len());
//! ```

pub mod moments;
pub mod ratios;
pub mod returns;
pub mod types;

// Re-export commonly used types
pub use types::{MomentMetrics, Side, SortinoConfig, ZeroDeviationPolicy};

// Re-export main functionality
pub use moments::{higher_partial_moment, lower_partial_moment, partial_moment};
pub use ratios::{
    calculate_moment_metrics, downside_deviation, omega_ratio, sortino, sortino_rows,
    sortino_with_config, upside_potential_ratio,
};
pub use returns::{cumulative_returns, growth_factors, total_return};

/// Error types for moments-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Return series is empty")]
    EmptySeries,

    #[error("Non-finite return at index {index}: {value}")]
    NonFiniteReturn { index: usize, value: f64 },

    #[error("Non-finite threshold: {0}")]
    NonFiniteThreshold(f64),

    #[error("Invalid moment order: {0} (must be finite and positive)")]
    InvalidOrder(f64),

    #[error("No return falls below threshold {threshold}")]
    NoDownside { threshold: f64 },

    #[error("Row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for moments-core operations.
pub type Result<T> = std::result::Result<T, Error>;
