// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::*;
use ndarray::Array2;

use sk_flag::{flag, type3_bounds, FlagSettings, DEFAULT_PFA};

fn gsk_flagging(c: &mut Criterion) {
    // Deterministic pseudo-noise on [0.5, 1.5] with unit mean; every channel
    // gets a full cycle of values, so no channel is noise-free.
    let m = 128;
    let num_channels = 1024;
    let mut power = Array2::zeros((m, num_channels));
    for ((i, j), p) in power.indexed_iter_mut() {
        *p = 1.0 + 0.5 * (((i * 31 + j * 17) % 13) as f64 / 6.0 - 1.0);
    }
    let power = power.into_dyn();
    let settings = FlagSettings::default();

    c.bench_function("flag 128x1024", |b| {
        b.iter(|| flag(power.view(), &settings).unwrap())
    });
}

fn threshold_solving(c: &mut Criterion) {
    c.bench_function("type3_bounds M=6104", |b| {
        b.iter(|| type3_bounds(black_box(6104.0), 1.0, 1.0, DEFAULT_PFA).unwrap())
    });
}

criterion_group!(benches, gsk_flagging, threshold_solving);
criterion_main!(benches);
