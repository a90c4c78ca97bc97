// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DistributionError {
    #[error("The target false-alarm probability {pfa} is outside (0, 0.5); this is not permitted")]
    InvalidFalseAlarmProbability { pfa: f64 },

    #[error("The moment fit produced a gamma shape beta = {beta}, which is not a positive real; the Type III quantiles are undefined")]
    NonPositiveShape { beta: f64 },

    #[error("The threshold root search did not converge within {iterations} iterations (last iterate {best})")]
    NoConvergence { iterations: u32, best: f64 },

    #[error(transparent)]
    Moments(#[from] crate::moments::MomentsError),
}
