// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;

#[test]
fn test_median_odd_count() {
    assert_abs_diff_eq!(median(vec![3.0, 1.0, 2.0]).unwrap(), 2.0);
    assert_abs_diff_eq!(median(vec![5.0]).unwrap(), 5.0);
}

#[test]
fn test_median_even_count() {
    assert_abs_diff_eq!(median(vec![4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
    assert_abs_diff_eq!(median(vec![-1.0, 1.0]).unwrap(), 0.0);
}

#[test]
fn test_median_empty() {
    assert!(median(vec![]).is_none());
}
