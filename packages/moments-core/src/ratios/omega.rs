//! Omega and upside potential ratios.

use crate::moments::{higher_partial_moment, lower_partial_moment};
use crate::{Error, Result};

/// Calculate the Omega ratio: upside excess over downside shortfall.
///
/// `Omega = HPM(threshold, 1) / LPM(threshold, 1)`
pub fn omega_ratio(returns: &[f64], threshold: f64) -> Result<f64> {
    let lpm1 = lower_partial_moment(returns, threshold, 1.0)?;
    if lpm1 == 0.0 {
        return Err(Error::NoDownside { threshold });
    }

    let hpm1 = higher_partial_moment(returns, threshold, 1.0)?;
    Ok(hpm1 / lpm1)
}

/// Calculate the upside potential ratio.
///
/// `UPR = HPM(threshold, 1) / sqrt(LPM(threshold, 2))`
pub fn upside_potential_ratio(returns: &[f64], threshold: f64) -> Result<f64> {
    let lpm2 = lower_partial_moment(returns, threshold, 2.0)?;
    if lpm2 == 0.0 {
        return Err(Error::NoDownside { threshold });
    }

    let hpm1 = higher_partial_moment(returns, threshold, 1.0)?;
    Ok(hpm1 / lpm2.sqrt())
}
