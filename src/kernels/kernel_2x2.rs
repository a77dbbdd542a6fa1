//! Portable 2×2 complex microkernel.

use crate::matrix::cmac;

/// Computes a 2×2 output tile of C = A * B^T from two rows of A and two rows of B.
///
/// Returns `[c00, c01, c10, c11]` where `cij = sum_n a_i[n] * b_j[n]`. Each
/// A value is loaded once and used against both B rows, and vice versa,
/// which halves the loads of the basic loop. Every accumulator still sums
/// in increasing n, so the result is bit-identical to the basic kernel.
///
/// All four slices must hold the same number of interleaved complex values.
#[inline(always)]
pub fn kernel_2x2(a0: &[f32], a1: &[f32], b0: &[f32], b1: &[f32]) -> [[f32; 2]; 4] {
    let mut acc = [[0.0f32; 2]; 4];

    let a_pairs = a0.chunks_exact(2).zip(a1.chunks_exact(2));
    let b_pairs = b0.chunks_exact(2).zip(b1.chunks_exact(2));

    for ((x0, x1), (y0, y1)) in a_pairs.zip(b_pairs) {
        cmac(&mut acc[0], x0, y0);
        cmac(&mut acc[1], x0, y1);
        cmac(&mut acc[2], x1, y0);
        cmac(&mut acc[3], x1, y1);
    }

    acc
}
