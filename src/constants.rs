// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision; flagging decisions are made from
statistics a few parts in 10^3 away from unity, so nothing here can afford a
trip through f32.
 */

/// The default two-tailed false-alarm probability. Under a normal
/// distribution this is the probability mass outside 3 sigma on one side, so
/// the default thresholds flag at the "3 sigma equivalent" level.
pub const DEFAULT_PFA: f64 = 0.0013499;

/// Absolute tolerance on successive iterates of the threshold root search.
pub const SOLVER_TOLERANCE: f64 = 1.48e-8;

/// Maximum number of root-search iterations before giving up and reporting
/// non-convergence.
pub const SOLVER_MAX_ITERATIONS: u32 = 50;
