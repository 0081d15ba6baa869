//! Lower and higher partial moment calculation.

use crate::types::Side;
use crate::{Error, Result};

/// Calculate the lower partial moment of a return series.
///
/// `LPM = sum(max(threshold - r, 0)^order) / n`, where `n` is the length of
/// the whole series, not just the returns below the threshold.
///
/// # Arguments
///
/// * `returns` - Periodic returns (e.g., 0.01 for 1%)
/// * `threshold` - Minimum acceptable return
/// * `order` - Moment order (1 for mean shortfall, 2 for downside variance)
///
/// # Returns
///
/// A non-negative moment, exactly `0.0` when no return falls below the threshold.
///
/// # Example
///
/// ```rust
/// use moments_core::lower_partial_moment;
///
/// let returns = [0.01, -0.02, 0.03, -0.01];
///
/// // (0.02 + 0.01) / 4
/// let lpm1 = lower_partial_moment(&returns, 0.0, 1.0).unwrap();
/// assert!((lpm1 - 0.0075).abs() < 1e-12);
/// ```
pub fn lower_partial_moment(returns: &[f64], threshold: f64, order: f64) -> Result<f64> {
    partial_moment(returns, threshold, order, Side::Lower)
}

/// Calculate the higher partial moment of a return series.
///
/// `HPM = sum(max(r - threshold, 0)^order) / n`, using the same full-length
/// denominator as [`lower_partial_moment`].
pub fn higher_partial_moment(returns: &[f64], threshold: f64, order: f64) -> Result<f64> {
    partial_moment(returns, threshold, order, Side::Higher)
}

/// Calculate a partial moment on the given side of the threshold.
///
/// Integral orders are raised with `powi`, fractional orders with `powf`.
/// Returns on the other side of the threshold contribute nothing to the sum
/// but still count towards the denominator.
pub fn partial_moment(returns: &[f64], threshold: f64, order: f64, side: Side) -> Result<f64> {
    validate_series(returns, threshold)?;
    validate_order(order)?;

    let n = returns.len() as f64;
    let sum: f64 = returns
        .iter()
        .map(|&r| side.deviation(r, threshold))
        .filter(|&d| d > 0.0)
        .map(|d| raise(d, order))
        .sum();

    let moment = sum / n;
    tracing::trace!(
        "{} partial moment: order={} threshold={} n={} -> {}",
        side,
        order,
        threshold,
        returns.len(),
        moment
    );

    Ok(moment)
}

/// Reject empty series and non-finite inputs.
pub(crate) fn validate_series(returns: &[f64], threshold: f64) -> Result<()> {
    if returns.is_empty() {
        return Err(Error::EmptySeries);
    }

    if let Some((index, &value)) = returns.iter().enumerate().find(|(_, r)| !r.is_finite()) {
        return Err(Error::NonFiniteReturn { index, value });
    }

    if !threshold.is_finite() {
        return Err(Error::NonFiniteThreshold(threshold));
    }

    Ok(())
}

/// Orders must be finite and strictly positive.
pub(crate) fn validate_order(order: f64) -> Result<()> {
    if order.is_finite() && order > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidOrder(order))
    }
}

#[inline]
fn raise(base: f64, order: f64) -> f64 {
    if order.fract() == 0.0 && order <= i32::MAX as f64 {
        base.powi(order as i32)
    } else {
        base.powf(order)
    }
}
