// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;
use ndarray::{array, ArrayD, IxDyn};

use super::*;

#[test]
fn test_constant_power_has_zero_kurtosis() {
    // Noise-free power: S1 = M v, S2 = M v^2, so M S2 / S1^2 = 1 and the
    // estimator vanishes for any M and v.
    for m in [2.0, 128.0, 6104.0] {
        for v in [0.5, 1.0, 3.0e3] {
            let sk = sk_estimator(m * v, m * v * v, m, 1.0, 1.0);
            assert_abs_diff_eq!(sk, 0.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_estimator_matches_hand_computation() {
    // M = 4, samples [1, 2, 3, 4]: S1 = 10, S2 = 30, and
    // (4 + 1)/(4 - 1) * (4 * 30/100 - 1) = 5/3 * 1/5.
    let sk = sk_estimator(10.0, 30.0, 4.0, 1.0, 1.0);
    assert_abs_diff_eq!(sk, 1.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_shape_correction_scales_the_estimator() {
    // The correction enters only through the leading factor.
    let uncorrected = sk_estimator(10.0, 30.0, 4.0, 1.0, 1.0);
    let corrected = sk_estimator(10.0, 30.0, 4.0, 1.0, 2.0);
    assert_abs_diff_eq!(corrected / uncorrected, 9.0 / 5.0, epsilon = 1e-12);
}

#[test]
fn test_power_sums() {
    let power = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]].into_dyn();
    let (s1, s2) = power_sums(power.view());
    assert_abs_diff_eq!(s1, array![9.0, 12.0].into_dyn(), epsilon = 1e-12);
    assert_abs_diff_eq!(s2, array![35.0, 56.0].into_dyn(), epsilon = 1e-12);
}

#[test]
fn test_power_sums_keep_the_channel_shape() {
    let power = ArrayD::from_elem(IxDyn(&[8, 2, 3]), 1.5);
    let (s1, s2) = power_sums(power.view());
    assert_eq!(s1.shape(), &[2, 3]);
    assert_eq!(s2.shape(), &[2, 3]);
    assert_abs_diff_eq!(s1[[0, 0]], 12.0, epsilon = 1e-12);
    assert_abs_diff_eq!(s2[[1, 2]], 18.0, epsilon = 1e-12);
}

#[test]
fn test_estimator_map_matches_the_scalar_function() {
    let s1 = array![10.0, 9.0, 12.0].into_dyn();
    let s2 = array![30.0, 35.0, 56.0].into_dyn();
    let sk = sk_estimator_map(s1.view(), s2.view(), 4.0, 1.0, 1.0);
    assert_eq!(sk.shape(), &[3]);
    for ((&sk, &s1), &s2) in sk.iter().zip(s1.iter()).zip(s2.iter()) {
        assert_eq!(sk, sk_estimator(s1, s2, 4.0, 1.0, 1.0));
    }
}

#[test]
fn test_unit_median_gives_unit_correction() {
    // median(SK) = 1 leaves the estimator uncorrected:
    // d = (M - 1 + 1)/(M * 1) = 1.
    let sk = array![0.9, 1.0, 1.1].into_dyn();
    let d = shape_correction(sk.view(), 128.0).unwrap();
    assert_abs_diff_eq!(d, 1.0, epsilon = 1e-12);
}

#[test]
fn test_degenerate_median_is_rejected() {
    let sk = array![0.0, 0.0, 5.0].into_dyn();
    assert!(matches!(
        shape_correction(sk.view(), 128.0),
        Err(EstimatorError::DegenerateMedian { .. })
    ));
    let sk = array![-1.0, -0.5, -0.2].into_dyn();
    assert!(shape_correction(sk.view(), 128.0).is_err());
}

#[test]
fn test_negative_correction_is_rejected() {
    // A median above M + 1 drives d below zero.
    let sk = array![130.0, 131.0, 132.0].into_dyn();
    assert!(matches!(
        shape_correction(sk.view(), 128.0),
        Err(EstimatorError::NegativeShapeCorrection { .. })
    ));
}

#[test]
fn test_no_channels_is_rejected() {
    let sk = ArrayD::<f64>::zeros(IxDyn(&[0]));
    assert!(matches!(
        shape_correction(sk.view(), 128.0),
        Err(EstimatorError::NoChannels)
    ));
}
