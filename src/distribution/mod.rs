// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
The Pearson Type III approximation to the GSK sampling distribution.

The estimator's first three moments are mapped algebraically onto a shifted,
scaled gamma distribution (Pearson Type III), whose cumulative functions are
then inverted by root-finding to obtain the two-sided rejection thresholds
for a target false-alarm probability.
 */

mod error;

pub use error::DistributionError;

use ndarray::{ArrayD, ArrayViewD, Zip};
use serde::{Deserialize, Serialize};
use statrs::function::gamma::{gamma_lr, gamma_ur};

use crate::constants::{SOLVER_MAX_ITERATIONS, SOLVER_TOLERANCE};
use crate::moments::{gsk_moments, Moments};

/// Pearson Type III parameters: `alpha` scales, `beta` is the gamma shape,
/// `delta` shifts the support (the distribution has no mass below it).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Type3Params {
    pub alpha: f64,
    pub beta: f64,
    pub delta: f64,
}

/// Two-sided rejection thresholds. An estimator value outside
/// `[lower, upper]` is flagged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub lower: f64,
    pub upper: f64,
}

/// Map the first four moments onto Type III parameters.
///
/// Purely algebraic. A vanishing third moment yields non-finite parameters;
/// they are propagated as-is, not sanitised, and surface as a
/// [`DistributionError::NonPositiveShape`] once the thresholds are requested.
pub fn type3_params(moments: &Moments) -> Type3Params {
    let Moments { mu1, mu2, mu3, .. } = *moments;
    Type3Params {
        alpha: mu3 / (2.0 * mu2),
        beta: 4.0 * mu2.powi(3) / mu3.powi(2),
        delta: mu1 - 2.0 * mu2.powi(2) / mu3,
    }
}

/// The cumulative function of the Type III pdf at `xi`.
///
/// The support starts at `delta`: any normalised argument below 0 clamps to
/// 0 rather than being fed to the incomplete gamma function. A non-positive
/// or non-finite `beta` makes the distribution undefined and yields NaN.
pub fn type3_cf(xi: f64, params: &Type3Params) -> f64 {
    let x = (xi - params.delta) / params.alpha;
    if !params.beta.is_finite() || params.beta <= 0.0 || x.is_nan() {
        f64::NAN
    } else if x <= 0.0 {
        0.0
    } else if x.is_infinite() {
        1.0
    } else {
        gamma_lr(params.beta, x)
    }
}

/// The complementary cumulative function of the Type III pdf at `xi`.
///
/// Clamps to 0 below the support, like [`type3_cf`]. (At the support
/// boundary itself all of the mass is still to the right, so the value is
/// 1.)
pub fn type3_ccf(xi: f64, params: &Type3Params) -> f64 {
    let x = (xi - params.delta) / params.alpha;
    if !params.beta.is_finite() || params.beta <= 0.0 || x.is_nan() {
        f64::NAN
    } else if x < 0.0 {
        0.0
    } else if x == 0.0 {
        1.0
    } else if x.is_infinite() {
        0.0
    } else {
        gamma_ur(params.beta, x)
    }
}

/// Elementwise [`type3_cf`] over an array of quantiles of arbitrary shape.
/// Every element is independent; there is no coupling between them.
pub fn type3_cf_map(xi: ArrayViewD<f64>, params: &Type3Params) -> ArrayD<f64> {
    Zip::from(&xi).par_map_collect(|&xi| type3_cf(xi, params))
}

/// Elementwise [`type3_ccf`] over an array of quantiles of arbitrary shape.
pub fn type3_ccf_map(xi: ArrayViewD<f64>, params: &Type3Params) -> ArrayD<f64> {
    Zip::from(&xi).par_map_collect(|&xi| type3_ccf(xi, params))
}

/// The two-sided rejection thresholds of the GSK estimator for the given
/// shape parameters and target false-alarm probability: the moments are
/// computed, fitted to a Type III distribution, and the CF/CCF inverted.
pub fn type3_bounds(m: f64, n: f64, d: f64, pfa: f64) -> Result<Thresholds, DistributionError> {
    if !(pfa > 0.0 && pfa < 0.5) {
        return Err(DistributionError::InvalidFalseAlarmProbability { pfa });
    }
    let moments = gsk_moments(m, n, d)?;
    let params = type3_params(&moments);
    threshold_roots(&params, pfa)
}

/// Root searches against already-fitted Type III parameters: `lower` solves
/// CF(xi) = PFA and `upper` solves CCF(xi) = PFA, each independently from an
/// initial guess of 1.
///
/// `beta` must be a positive, finite gamma shape. A degenerate fit is
/// rejected here, before any root search runs, so that it surfaces as a
/// fitting failure rather than being obscured as a solver failure.
pub fn threshold_roots(params: &Type3Params, pfa: f64) -> Result<Thresholds, DistributionError> {
    if !(pfa > 0.0 && pfa < 0.5) {
        return Err(DistributionError::InvalidFalseAlarmProbability { pfa });
    }
    if !params.beta.is_finite() || params.beta <= 0.0 {
        return Err(DistributionError::NonPositiveShape { beta: params.beta });
    }

    let lower = find_root(|xi| type3_cf(xi, params) - pfa, 1.0)?;
    let upper = find_root(|xi| type3_ccf(xi, params) - pfa, 1.0)?;
    Ok(Thresholds { lower, upper })
}

/// Find a root of `f` by the secant iteration, starting from `x0` and a
/// second point perturbed a relative 1e-4 away. Tolerance and iteration
/// limit follow [`SOLVER_TOLERANCE`] and [`SOLVER_MAX_ITERATIONS`].
///
/// Failure to converge is an error; no sentinel value is ever substituted.
fn find_root<F>(f: F, x0: f64) -> Result<f64, DistributionError>
where
    F: Fn(f64) -> f64,
{
    const PERTURBATION: f64 = 1e-4;

    let mut p0 = x0;
    let mut p1 = x0 * (1.0 + PERTURBATION) + PERTURBATION.copysign(x0);
    let mut q0 = f(p0);
    let mut q1 = f(p1);
    // Iterate from the point with the smaller residual.
    if q1.abs() < q0.abs() {
        std::mem::swap(&mut p0, &mut p1);
        std::mem::swap(&mut q0, &mut q1);
    }

    for _ in 0..SOLVER_MAX_ITERATIONS {
        if q1 == q0 {
            // A flat secant can't make progress. If the bracket has already
            // collapsed this is convergence; otherwise give up.
            if (p1 - p0).abs() <= SOLVER_TOLERANCE {
                return Ok((p0 + p1) / 2.0);
            }
            return Err(DistributionError::NoConvergence {
                iterations: SOLVER_MAX_ITERATIONS,
                best: p1,
            });
        }

        let p = p1 - q1 * (p1 - p0) / (q1 - q0);
        if !p.is_finite() {
            return Err(DistributionError::NoConvergence {
                iterations: SOLVER_MAX_ITERATIONS,
                best: p1,
            });
        }
        if (p - p1).abs() < SOLVER_TOLERANCE {
            return Ok(p);
        }
        p0 = p1;
        q0 = q1;
        p1 = p;
        q1 = f(p1);
    }

    Err(DistributionError::NoConvergence {
        iterations: SOLVER_MAX_ITERATIONS,
        best: p1,
    })
}
