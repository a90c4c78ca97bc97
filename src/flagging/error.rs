// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlagError {
    #[error("The power array has no axes; the first axis must be the accumulation axis")]
    NoAccumulationAxis,

    #[error("The accumulation axis has length {m}, but at least 2 samples are needed")]
    AccumulationTooShort { m: usize },

    #[error("Power value {value} at flat index {index} is not a finite, non-negative real")]
    InvalidPower { index: usize, value: f64 },

    #[error(transparent)]
    Estimator(#[from] crate::estimator::EstimatorError),

    #[error(transparent)]
    Distribution(#[from] crate::distribution::DistributionError),
}
