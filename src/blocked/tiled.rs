//! 2×2 tiled complex transpose-multiply, portable.

use crate::kernels::kernel_2x2::kernel_2x2;
use crate::matrix::{debug_check_shapes, dot_trans_cmplx, row};

/// Tiled complex transpose-multiply using the portable 2×2 kernel.
///
/// Walks C in 2×2 tiles, handing two rows of A and two rows of B to the
/// microkernel for each tile. Leftover rows and columns (odd M or O) go
/// through the basic loop. Output is bit-identical to
/// [`mat_mult_trans_cmplx_basic`](crate::matrix::trans_basic::mat_mult_trans_cmplx_basic).
///
/// Arguments are the same as for the basic kernel.
pub fn mat_mult_trans_cmplx_tiled(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    m: usize,
    n: usize,
    o: usize,
) {
    debug_check_shapes(a, b, c, m, n, o);
    drive_tiles_2x2(a, b, c, m, n, o, kernel_2x2);
}

/// Runs `tile` over every full 2×2 tile of C, then finishes the edges.
pub(crate) fn drive_tiles_2x2<K>(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    m: usize,
    n: usize,
    o: usize,
    mut tile: K,
) where
    K: FnMut(&[f32], &[f32], &[f32], &[f32]) -> [[f32; 2]; 4],
{
    // Only complete 2×2 tiles here, leftovers handled separately
    let m_main = (m / 2) * 2;
    let o_main = (o / 2) * 2;

    for i in (0..m_main).step_by(2) {
        let a0 = row(a, i, n);
        let a1 = row(a, i + 1, n);

        for j in (0..o_main).step_by(2) {
            let [c00, c01, c10, c11] = tile(a0, a1, row(b, j, n), row(b, j + 1, n));

            store(c, o, i, j, c00);
            store(c, o, i, j + 1, c01);
            store(c, o, i + 1, j, c10);
            store(c, o, i + 1, j + 1, c11);
        }
    }

    if o_main < o {
        edge_case_cols(a, b, c, m_main, o_main, n, o);
    }
    if m_main < m {
        edge_case_rows(a, b, c, m_main, m, n, o);
    }
}

#[inline(always)]
fn store(c: &mut [f32], o: usize, i: usize, j: usize, value: [f32; 2]) {
    let idx = (i * o + j) * 2;
    c[idx..idx + 2].copy_from_slice(&value);
}

// Rows that don't fill a 2×2 tile (just the basic loop, all columns)
fn edge_case_rows(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    i_start: usize,
    m: usize,
    n: usize,
    o: usize,
) {
    for i in i_start..m {
        let a_row = row(a, i, n);
        for j in 0..o {
            store(c, o, i, j, dot_trans_cmplx(a_row, row(b, j, n)));
        }
    }
}

// Columns that don't fill a 2×2 tile, for the rows the tiles covered
fn edge_case_cols(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    i_end: usize,
    j_start: usize,
    n: usize,
    o: usize,
) {
    for i in 0..i_end {
        let a_row = row(a, i, n);
        for j in j_start..o {
            store(c, o, i, j, dot_trans_cmplx(a_row, row(b, j, n)));
        }
    }
}
