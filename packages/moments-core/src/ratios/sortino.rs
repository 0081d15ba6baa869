//! Downside deviation and Sortino trajectory calculation.

use crate::moments::lower_partial_moment;
use crate::returns::cumulative_returns;
use crate::types::{SortinoConfig, ZeroDeviationPolicy};
use crate::{Error, Result};

/// Calculate the downside deviation of a return series.
///
/// This is the `order`-th root of the lower partial moment, i.e. the square
/// root of the downside variance for the usual order of 2.
pub fn downside_deviation(returns: &[f64], threshold: f64, order: f64) -> Result<f64> {
    let lpm = lower_partial_moment(returns, threshold, order)?;

    if order == 2.0 {
        Ok(lpm.sqrt())
    } else {
        Ok(lpm.powf(order.recip()))
    }
}

/// Calculate the Sortino trajectory of a return series.
///
/// Each entry is the cumulative compounded growth up to that period divided by
/// the square root of the series' lower partial moment of the given order.
/// The last entry is the total growth over that downside risk.
///
/// # Arguments
///
/// * `returns` - Periodic returns in chronological order
/// * `threshold` - Minimum acceptable return (typically 0.0)
/// * `order` - Lower partial moment order under the square root (typically 2)
///
/// # Returns
///
/// A vector the same length as `returns`, or
/// [`Error::NoDownside`] if no return falls below the threshold.
///
/// # Example
///
/// ```rust
/// use moments_core::sortino;
///
/// let returns = [0.01, -0.02, 0.03, -0.01];
/// let trajectory = sortino(&returns, 0.0, 2.0).unwrap();
///
/// // Downside deviation is sqrt(0.000125); first period grew by 1%
/// assert!((trajectory[0] - 1.01 / 0.000125f64.sqrt()).abs() < 1e-9);
/// ```
pub fn sortino(returns: &[f64], threshold: f64, order: f64) -> Result<Vec<f64>> {
    let config = SortinoConfig::new()
        .with_threshold(threshold)
        .with_order(order);
    sortino_with_config(returns, &config)
}

/// Calculate the Sortino trajectory using an explicit [`SortinoConfig`].
///
/// With [`ZeroDeviationPolicy::Infinity`] a zero downside risk yields +Inf
/// per period, or NaN where the cumulative growth is exactly zero.
pub fn sortino_with_config(returns: &[f64], config: &SortinoConfig) -> Result<Vec<f64>> {
    let deviation = lower_partial_moment(returns, config.threshold, config.order)?.sqrt();

    if deviation == 0.0 {
        match config.zero_deviation {
            ZeroDeviationPolicy::Error => {
                return Err(Error::NoDownside {
                    threshold: config.threshold,
                });
            }
            ZeroDeviationPolicy::Infinity => {
                tracing::warn!(
                    "Zero downside deviation at threshold {}, Sortino trajectory is unbounded (NaN where growth is zero)",
                    config.threshold
                );
            }
        }
    }

    Ok(cumulative_returns(returns)
        .into_iter()
        .map(|growth| growth / deviation)
        .collect())
}

/// Calculate Sortino trajectories for a batch of independent return series.
///
/// Every row gets its own downside deviation and its own cumulative product,
/// so the result equals calling [`sortino_with_config`] on each row in turn.
/// Failures are wrapped in [`Error::Row`] with the offending row index.
pub fn sortino_rows<R>(rows: &[R], config: &SortinoConfig) -> Result<Vec<Vec<f64>>>
where
    R: AsRef<[f64]>,
{
    tracing::debug!("Computing Sortino trajectories for {} rows", rows.len());

    rows.iter()
        .enumerate()
        .map(|(row, returns)| {
            sortino_with_config(returns.as_ref(), config).map_err(|e| Error::Row {
                row,
                source: Box::new(e),
            })
        })
        .collect()
}
