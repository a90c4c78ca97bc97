// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
RFI flagging from the generalised spectral kurtosis statistic.

The pipeline is data-parallel over channels with a single synchronisation
point in the middle:

1. per-channel sums S1/S2 and the uncorrected estimator (parallel);
2. the global median of the uncorrected estimator, from which the shape
   correction d is derived (the one barrier);
3. the corrected estimator, one threshold pair from the estimator's
   sampling moments at the estimated d, and the per-channel comparison
   (parallel again).

The input power array is only ever read; all results are freshly allocated.
 */

mod error;

pub use error::FlagError;

use log::debug;
use ndarray::{ArrayD, ArrayViewD, Axis, Zip};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PFA;
use crate::distribution::{type3_bounds, Thresholds};
use crate::estimator::{power_sums, shape_correction, sk_estimator_map, EstimatorError};

/// Settings for a flagging invocation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagSettings {
    /// The target two-tailed false-alarm probability. The default,
    /// [`DEFAULT_PFA`], flags at the 3-sigma-equivalent level.
    pub pfa: f64,
}

impl Default for FlagSettings {
    fn default() -> FlagSettings {
        FlagSettings { pfa: DEFAULT_PFA }
    }
}

/// Every intermediate quantity behind a set of flagging decisions. Useful
/// for plotting the statistic against its thresholds, or for working out why
/// a particular channel was (or wasn't) flagged.
#[derive(Debug, Clone)]
pub struct FlagDiagnostics {
    /// The corrected estimator values that were tested against the
    /// thresholds. Channel shape (input shape minus axis 0).
    pub sk: ArrayD<f64>,

    /// Per-channel power sums.
    pub s1: ArrayD<f64>,

    /// Per-channel power sums of squares.
    pub s2: ArrayD<f64>,

    /// The accumulation length (the length of the input's first axis).
    pub m: usize,

    /// The globally-estimated shape correction.
    pub d: f64,

    /// The rejection thresholds applied to every channel.
    pub thresholds: Thresholds,

    /// The flag mask; `true` means RFI-contaminated.
    pub flags: ArrayD<bool>,
}

/// Flag RFI-contaminated channels of `power`, whose first axis must be the
/// accumulation axis (length >= 2) and whose remaining axes index
/// independent channels. Returns the boolean mask over the channel axes;
/// [`flag_verbose`] additionally returns all intermediate quantities.
///
/// This is a pure function of its inputs: no state survives the call, and
/// repeated invocations on the same input produce identical masks.
pub fn flag(power: ArrayViewD<f64>, settings: &FlagSettings) -> Result<ArrayD<bool>, FlagError> {
    flag_verbose(power, settings).map(|diagnostics| diagnostics.flags)
}

/// As [`flag`], but returns the full intermediate state of the computation.
pub fn flag_verbose(
    power: ArrayViewD<f64>,
    settings: &FlagSettings,
) -> Result<FlagDiagnostics, FlagError> {
    if power.ndim() == 0 {
        return Err(FlagError::NoAccumulationAxis);
    }
    let m = power.len_of(Axis(0));
    if m < 2 {
        return Err(FlagError::AccumulationTooShort { m });
    }
    if let Some((index, &value)) = power
        .iter()
        .enumerate()
        .find(|(_, &p)| !p.is_finite() || p < 0.0)
    {
        return Err(FlagError::InvalidPower { index, value });
    }

    let (s1, s2) = power_sums(power);

    // A channel whose power sums to zero has an undefined estimator; it
    // cannot be flagged and must not be silently passed through as NaN.
    let degenerate: Vec<usize> = s1
        .iter()
        .enumerate()
        .filter(|(_, &s1)| s1 == 0.0)
        .map(|(i, _)| i)
        .collect();
    if !degenerate.is_empty() {
        return Err(EstimatorError::DegeneratePowerSums {
            channels: degenerate,
        }
        .into());
    }

    let m_f = m as f64;

    // First pass with no correction, then the one synchronisation point:
    // every channel's uncorrected statistic feeds the global median.
    let sk = sk_estimator_map(s1.view(), s2.view(), m_f, 1.0, 1.0);
    let d = shape_correction(sk.view(), m_f)?;
    let sk = sk_estimator_map(s1.view(), s2.view(), m_f, 1.0, d);

    let thresholds = type3_bounds(m_f, 1.0, d, settings.pfa)?;
    debug!(
        "GSK flagging: M = {m}, {} channels, d = {d:.6}, thresholds = [{:.6}, {:.6}]",
        sk.len(),
        thresholds.lower,
        thresholds.upper
    );

    let flags =
        Zip::from(&sk).par_map_collect(|&sk| sk < thresholds.lower || sk > thresholds.upper);
    debug!(
        "{} of {} channels flagged",
        flags.iter().filter(|&&flag| flag).count(),
        flags.len()
    );

    Ok(FlagDiagnostics {
        sk,
        s1,
        s2,
        m,
        d,
        thresholds,
        flags,
    })
}
