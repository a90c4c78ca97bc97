// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("The power array has no channels; there is nothing to estimate")]
    NoChannels,

    #[error("Channels {channels:?} (flat indices) have zero summed power; their estimators are undefined and they cannot be flagged")]
    DegeneratePowerSums { channels: Vec<usize> },

    #[error("The median of the uncorrected estimator is {median}, which is not positive; the shape correction cannot be estimated")]
    DegenerateMedian { median: f64 },

    #[error("The estimated shape correction d = {d} (from median {median}) is negative, which has no physical meaning")]
    NegativeShapeCorrection { d: f64, median: f64 },
}
