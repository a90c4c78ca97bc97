// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Closed-form sampling moments of the generalised spectral kurtosis estimator.

These are the expected moments of the estimator under the null hypothesis
(RFI-free, chi-square-scaled power), as published by Nita & Gary (2010).
They are exact expressions in the accumulation length M, the number of
internally-summed sub-spectra N and the shape correction d; nothing here is
an approximation.
 */

mod error;

pub use error::MomentsError;

use serde::{Deserialize, Serialize};

/// The first four moments of the GSK estimator's sampling distribution. The
/// estimator is mean-normalised, so `mu1` is always exactly 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Moments {
    pub mu1: f64,
    pub mu2: f64,
    pub mu3: f64,
    pub mu4: f64,
}

/// Γ(x) / Γ(x + n) for integer n >= 1, i.e. the reciprocal of the product of
/// the n consecutive terms starting at x. For the arguments used here (x of
/// order M·N·d) both gamma functions overflow f64 long before the ratio
/// does, so the two must never be evaluated separately.
pub fn gamma_ratio(x: f64, n: u32) -> f64 {
    1.0 / (0..n).fold(1.0, |product, k| product * (x + f64::from(k)))
}

/// The first four moments of the GSK estimator's distribution under the null
/// hypothesis of RFI-free power.
///
/// `m` must exceed 1; every central moment divides by (M - 1).
pub fn gsk_moments(m: f64, n: f64, d: f64) -> Result<Moments, MomentsError> {
    if m <= 1.0 {
        return Err(MomentsError::AccumulationLengthTooShort { m });
    }

    let nd = n * d;
    let mu2 = 2.0 * nd * (nd + 1.0) * m.powi(2) / (m - 1.0) * gamma_ratio(m * nd + 2.0, 2);
    let mu3 = 8.0 * nd * (nd + 1.0) * m.powi(3) / (m - 1.0).powi(2)
        * gamma_ratio(m * nd + 2.0, 4)
        * ((nd + 4.0) * m * nd - 5.0 * nd - 2.0);
    let mu4 = 12.0 * nd * (nd + 1.0) * m.powi(4) / (m - 1.0).powi(3)
        * gamma_ratio(m * nd + 2.0, 6)
        * (m.powi(3) * nd.powi(4) + 3.0 * m.powi(2) * nd.powi(4)
            + m.powi(3) * nd.powi(3)
            + 68.0 * m.powi(2) * nd.powi(3)
            - 93.0 * m * nd.powi(3)
            + 125.0 * m.powi(2) * nd.powi(2)
            - 245.0 * m * nd.powi(2)
            + 84.0 * nd.powi(2)
            - 32.0 * m * nd
            + 48.0 * nd
            + 24.0);

    Ok(Moments {
        mu1: 1.0,
        mu2,
        mu3,
        mu4,
    })
}
