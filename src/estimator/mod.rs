// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
The generalised spectral kurtosis estimator.

The estimator is a mean-normalised ratio of a channel's second power-sum
moment to its first; RFI-free chi-square-scaled power drives it towards 1,
non-Gaussian contamination pushes it away. Real data rarely match the ideal
assumption exactly, so a shape correction d is estimated from the data
themselves: the median of the uncorrected statistic across all channels is a
robust handle on the "clean" population as long as most channels are
RFI-free.
 */

mod error;
#[cfg(test)]
mod tests;

pub use error::EstimatorError;

use ndarray::{ArrayD, ArrayViewD, Axis, RemoveAxis, Zip};

use crate::math::median;

/// The GSK estimator for a single channel, from the power sum `s1` and power
/// sum-of-squares `s2` over `m` accumulated samples.
///
/// `m` must exceed 1 and `s1` must be non-zero; [`crate::flagging::flag_verbose`]
/// validates both before calling this.
#[inline]
pub fn sk_estimator(s1: f64, s2: f64, m: f64, n: f64, d: f64) -> f64 {
    (m * n * d + 1.0) / (m - 1.0) * (m * s2 / (s1 * s1) - 1.0)
}

/// Elementwise [`sk_estimator`] over per-channel sums. Channels are
/// independent, so this runs data-parallel with no coupling between
/// elements.
pub fn sk_estimator_map(
    s1: ArrayViewD<f64>,
    s2: ArrayViewD<f64>,
    m: f64,
    n: f64,
    d: f64,
) -> ArrayD<f64> {
    Zip::from(&s1)
        .and(&s2)
        .par_map_collect(|&s1, &s2| sk_estimator(s1, s2, m, n, d))
}

/// One parallel pass over the accumulation axis (axis 0) producing the
/// per-channel sufficient statistics (S1, S2). The returned arrays have the
/// input's shape minus the first axis.
///
/// The input must have at least one axis.
pub fn power_sums(power: ArrayViewD<f64>) -> (ArrayD<f64>, ArrayD<f64>) {
    let channel_dim = power.raw_dim().remove_axis(Axis(0));
    let mut s1 = ArrayD::zeros(channel_dim.clone());
    let mut s2 = ArrayD::zeros(channel_dim);
    Zip::from(&mut s1)
        .and(&mut s2)
        .and(power.lanes(Axis(0)))
        .par_for_each(|s1, s2, samples| {
            let mut sum = 0.0;
            let mut sum_sq = 0.0;
            for &p in samples {
                sum += p;
                sum_sq += p * p;
            }
            *s1 = sum;
            *s2 = sum_sq;
        });
    (s1, s2)
}

/// Estimate the shape correction d from the median of the uncorrected (d =
/// 1) estimator values across all channels.
///
/// The majority of channels are assumed RFI-free, making the median robust
/// against the contaminated tail. A median at or below 0, or one so large
/// that the correction would come out negative, has no physical meaning in
/// the moment formulas and is rejected.
pub fn shape_correction(sk: ArrayViewD<f64>, m: f64) -> Result<f64, EstimatorError> {
    let med = median(sk.iter().copied().collect()).ok_or(EstimatorError::NoChannels)?;
    if med <= 0.0 {
        return Err(EstimatorError::DegenerateMedian { median: med });
    }
    let d = (m - med + 1.0) / (m * med);
    if d < 0.0 {
        return Err(EstimatorError::NegativeShapeCorrection { d, median: med });
    }
    Ok(d)
}
