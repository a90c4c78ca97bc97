// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MomentsError {
    #[error("Accumulation length M = {m} is not greater than 1; the estimator moments divide by M - 1")]
    AccumulationLengthTooShort { m: f64 },
}
