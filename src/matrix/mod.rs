//! Complex matrix layout, views and the reference kernels.
//!
//! Every matrix in this crate is row-major with interleaved components:
//! entry (r, c) of an R×C matrix lives at `[(r * C + c) * 2]` (real) and
//! `[(r * C + c) * 2 + 1]` (imaginary). These modules provide the basic
//! triple-loop kernel that the tiled and SIMD versions are checked against.

pub mod mult_cmplx;
pub mod trans_basic;
pub mod transpose;
pub mod view;

/// Complex multiply-accumulate: `acc += a * b` on interleaved `[re, im]` pairs.
#[inline(always)]
pub(crate) fn cmac(acc: &mut [f32; 2], a: &[f32], b: &[f32]) {
    let (a_re, a_im) = (a[0], a[1]);
    let (b_re, b_im) = (b[0], b[1]);
    acc[0] += a_re * b_re - a_im * b_im;
    acc[1] += a_re * b_im + a_im * b_re;
}

/// Sum of `a_row[n] * b_row[n]` over the contraction index, in increasing n.
///
/// Both rows are interleaved and hold the same number of complex entries.
#[inline(always)]
pub(crate) fn dot_trans_cmplx(a_row: &[f32], b_row: &[f32]) -> [f32; 2] {
    let mut sum = [0.0f32; 2];
    for (a, b) in a_row.chunks_exact(2).zip(b_row.chunks_exact(2)) {
        cmac(&mut sum, a, b);
    }
    sum
}

/// Row `r` of an interleaved matrix with `cols` complex columns.
#[inline(always)]
pub(crate) fn row(data: &[f32], r: usize, cols: usize) -> &[f32] {
    &data[r * cols * 2..(r + 1) * cols * 2]
}

#[inline(always)]
pub(crate) fn row_mut(data: &mut [f32], r: usize, cols: usize) -> &mut [f32] {
    &mut data[r * cols * 2..(r + 1) * cols * 2]
}

/// Debug-only check that A (M×N), B (O×N) and C (M×O) are large enough.
///
/// Compiles to nothing in release builds.
#[inline(always)]
pub(crate) fn debug_check_shapes(a: &[f32], b: &[f32], c: &[f32], m: usize, n: usize, o: usize) {
    debug_assert!(
        a.len() >= 2 * m * n,
        "A: expected {}x{} complex = {} f32, got {}",
        m,
        n,
        2 * m * n,
        a.len()
    );
    debug_assert!(
        b.len() >= 2 * o * n,
        "B: expected {}x{} complex = {} f32, got {}",
        o,
        n,
        2 * o * n,
        b.len()
    );
    debug_assert!(
        c.len() >= 2 * m * o,
        "C: expected {}x{} complex = {} f32, got {}",
        m,
        o,
        2 * m * o,
        c.len()
    );
}
