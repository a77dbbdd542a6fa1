//! 2×2 AVX2 microkernel for complex transpose-multiply.

use std::arch::x86_64::*;

use crate::matrix::cmac;

/// Complex values per AVX2 register (8 × f32 = 4 interleaved pairs).
const LANES: usize = 4;

/// Computes a 2×2 output tile of C = A * B^T, vectorized along n.
///
/// Returns `[c00, c01, c10, c11]`. For every output two accumulators are
/// kept across the n loop:
/// - `p += a * b` lane-wise, giving `[a_re*b_re, a_im*b_im, ...]`
/// - `x += a * swap(b)`, giving `[a_re*b_im, a_im*b_re, ...]`
///
/// After the loop the real part is `sum(even lanes of p) - sum(odd lanes of p)`
/// and the imaginary part is the sum of all lanes of `x`. The `n % 4` tail is
/// finished with scalar multiply-accumulate.
///
/// Summation order differs from the basic kernel (four partial sums per
/// output plus FMA rounding), so results agree within f32 tolerance only.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX2 and FMA (checked via `#[target_feature]`)
/// - `a0`, `a1`, `b0`, `b1` each hold at least `2 * n` f32 values
#[target_feature(enable = "avx2,fma")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn kernel_2x2_avx2(
    a0: &[f32],
    a1: &[f32],
    b0: &[f32],
    b1: &[f32],
    n: usize,
) -> [[f32; 2]; 4] {
    debug_assert!(a0.len() >= 2 * n && a1.len() >= 2 * n);
    debug_assert!(b0.len() >= 2 * n && b1.len() >= 2 * n);

    let mut p00 = _mm256_setzero_ps();
    let mut p01 = _mm256_setzero_ps();
    let mut p10 = _mm256_setzero_ps();
    let mut p11 = _mm256_setzero_ps();
    let mut x00 = _mm256_setzero_ps();
    let mut x01 = _mm256_setzero_ps();
    let mut x10 = _mm256_setzero_ps();
    let mut x11 = _mm256_setzero_ps();

    let n_main = (n / LANES) * LANES;

    for p in (0..n_main).step_by(LANES) {
        let off = p * 2;
        let va0 = _mm256_loadu_ps(a0.as_ptr().add(off));
        let va1 = _mm256_loadu_ps(a1.as_ptr().add(off));
        let vb0 = _mm256_loadu_ps(b0.as_ptr().add(off));
        let vb1 = _mm256_loadu_ps(b1.as_ptr().add(off));

        // [re, im] -> [im, re] within each pair
        let sb0 = _mm256_permute_ps(vb0, 0b10_11_00_01);
        let sb1 = _mm256_permute_ps(vb1, 0b10_11_00_01);

        p00 = _mm256_fmadd_ps(va0, vb0, p00);
        x00 = _mm256_fmadd_ps(va0, sb0, x00);
        p01 = _mm256_fmadd_ps(va0, vb1, p01);
        x01 = _mm256_fmadd_ps(va0, sb1, x01);
        p10 = _mm256_fmadd_ps(va1, vb0, p10);
        x10 = _mm256_fmadd_ps(va1, sb0, x10);
        p11 = _mm256_fmadd_ps(va1, vb1, p11);
        x11 = _mm256_fmadd_ps(va1, sb1, x11);
    }

    let mut out = [
        reduce_cmplx(p00, x00),
        reduce_cmplx(p01, x01),
        reduce_cmplx(p10, x10),
        reduce_cmplx(p11, x11),
    ];

    let tail = n_main * 2..n * 2;
    let (ta0, ta1) = (&a0[tail.clone()], &a1[tail.clone()]);
    let (tb0, tb1) = (&b0[tail.clone()], &b1[tail]);
    for ((x0, x1), (y0, y1)) in ta0
        .chunks_exact(2)
        .zip(ta1.chunks_exact(2))
        .zip(tb0.chunks_exact(2).zip(tb1.chunks_exact(2)))
    {
        cmac(&mut out[0], x0, y0);
        cmac(&mut out[1], x0, y1);
        cmac(&mut out[2], x1, y0);
        cmac(&mut out[3], x1, y1);
    }

    out
}

/// Folds the product/swapped-product accumulators into one `[re, im]`.
#[target_feature(enable = "avx2,fma")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn reduce_cmplx(p: __m256, x: __m256) -> [f32; 2] {
    let mut pb = [0.0f32; 8];
    let mut xb = [0.0f32; 8];
    _mm256_storeu_ps(pb.as_mut_ptr(), p);
    _mm256_storeu_ps(xb.as_mut_ptr(), x);

    let re = (pb[0] - pb[1]) + (pb[2] - pb[3]) + ((pb[4] - pb[5]) + (pb[6] - pb[7]));
    let im = (xb[0] + xb[1]) + (xb[2] + xb[3]) + ((xb[4] + xb[5]) + (xb[6] + xb[7]));
    [re, im]
}
