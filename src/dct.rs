//! 2-D block transform drivers and dispatch
//!
//! All four transforms share one structure: run the 1-D kernel over the 8
//! rows into a scratch block, run it again column-wise, and transpose (the
//! inverse reads columns first, then rows, writing with a stride so no
//! transpose is needed). Each tile is processed independently; there is no
//! cross-tile state.

use crate::consts::{DCTSIZE, DCTSIZE2};
use crate::types::Transform;
use crate::{dct_approx, dct_loeffler, dct_matrix};

/// 1-D forward kernel: reads `src[i * stride]`, writes `dst[0..8]`
type Forward1d = fn(&[i32], usize, &mut [i32]);
/// 1-D inverse kernel: reads `src[0..8]`, writes `dst[i * stride]`
type Inverse1d = fn(&[i32], &mut [i32], usize);

fn transpose(block: &mut [i32]) {
    for y in 0..DCTSIZE {
        for x in y + 1..DCTSIZE {
            block.swap(y * DCTSIZE + x, x * DCTSIZE + y);
        }
    }
}

fn forward_2d(kernel: Forward1d, input: &[i32], output: &mut [i32]) {
    let mut tmp = [0i32; DCTSIZE2];

    for y in 0..DCTSIZE {
        kernel(&input[y * DCTSIZE..], 1, &mut tmp[y * DCTSIZE..y * DCTSIZE + DCTSIZE]);
    }
    // column pass lands column results in rows; transpose puts them back
    for x in 0..DCTSIZE {
        kernel(&tmp[x..], DCTSIZE, &mut output[x * DCTSIZE..x * DCTSIZE + DCTSIZE]);
    }
    transpose(output);
}

fn inverse_2d(kernel: Inverse1d, input: &[i32], output: &mut [i32]) {
    let mut tmp = [0i32; DCTSIZE2];
    let mut col = [0i32; DCTSIZE];

    for x in 0..DCTSIZE {
        for (y, c) in col.iter_mut().enumerate() {
            *c = input[y * DCTSIZE + x];
        }
        kernel(&col, &mut tmp[x..], DCTSIZE);
    }
    for y in 0..DCTSIZE {
        kernel(&tmp[y * DCTSIZE..y * DCTSIZE + DCTSIZE], &mut output[y * DCTSIZE..], 1);
    }
}

/// Apply the selected forward transform to one 64-sample tile
pub fn forward(transform: Transform, input: &[i32], output: &mut [i32]) {
    debug_assert_eq!(input.len(), DCTSIZE2);
    debug_assert_eq!(output.len(), DCTSIZE2);
    match transform {
        Transform::Loeffler => forward_2d(dct_loeffler::forward_1d, input, output),
        Transform::Matrix => forward_2d(dct_matrix::forward_1d, input, output),
        Transform::Approx => forward_2d(dct_approx::forward_1d, input, output),
        Transform::Identity => output.copy_from_slice(input),
    }
}

/// Apply the selected inverse transform to one 64-coefficient tile
pub fn inverse(transform: Transform, input: &[i32], output: &mut [i32]) {
    debug_assert_eq!(input.len(), DCTSIZE2);
    debug_assert_eq!(output.len(), DCTSIZE2);
    match transform {
        Transform::Loeffler => inverse_2d(dct_loeffler::inverse_1d, input, output),
        Transform::Matrix => inverse_2d(dct_matrix::inverse_1d, input, output),
        Transform::Approx => inverse_2d(dct_approx::inverse_1d, input, output),
        Transform::Identity => output.copy_from_slice(input),
    }
}
