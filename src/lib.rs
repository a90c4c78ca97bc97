// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Generalised-spectral-kurtosis RFI detection for channelised power spectra.

Given an array of accumulated power samples (the first axis indexing M
independent samples, all remaining axes indexing independent channels), this
crate computes the generalised spectral kurtosis (GSK) estimator per channel,
self-calibrates the estimator's shape correction from the global median,
derives two-sided rejection thresholds from a Pearson Type III approximation
to the estimator's sampling distribution, and returns a boolean mask over the
channels. `true` means "RFI contaminated".

Everything is recomputed per call; there is no hidden state, and calling
[`flag`] twice on the same input yields the same mask.

Reference: Nita, G. M., & Gary, D. E. (2010). The generalized spectral
kurtosis estimator. MNRAS Letters, 406(1), L60-L64.
doi:10.1111/j.1745-3933.2010.00882.x
 */

pub mod constants;
pub mod distribution;
pub mod error;
pub mod estimator;
pub mod flagging;
pub(crate) mod math;
pub mod moments;

// Re-exports.
pub use constants::DEFAULT_PFA;
pub use distribution::{
    type3_bounds, type3_ccf, type3_ccf_map, type3_cf, type3_cf_map, type3_params, Thresholds,
    Type3Params,
};
pub use error::SkFlagError;
pub use estimator::{power_sums, shape_correction, sk_estimator, sk_estimator_map};
pub use flagging::{flag, flag_verbose, FlagDiagnostics, FlagSettings};
pub use moments::{gamma_ratio, gsk_moments, Moments};
