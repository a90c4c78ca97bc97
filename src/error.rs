// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all sk_flag-related errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkFlagError {
    #[error("{0}")]
    Moments(#[from] crate::moments::MomentsError),

    #[error("{0}")]
    Distribution(#[from] crate::distribution::DistributionError),

    #[error("{0}")]
    Estimator(#[from] crate::estimator::EstimatorError),

    #[error("{0}")]
    Flag(#[from] crate::flagging::FlagError),
}
