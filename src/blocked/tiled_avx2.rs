//! 2×2 tiled complex transpose-multiply using AVX2.

use super::tiled::drive_tiles_2x2;
use crate::kernels::kernel_2x2_avx2::kernel_2x2_avx2;
use crate::matrix::debug_check_shapes;

/// Tiled complex transpose-multiply using the 2×2 AVX2 kernel.
///
/// Same tiling and edge handling as the portable version; only the tile
/// computation is vectorized. Rows of A and B are already contiguous along
/// n, so nothing needs packing or transposing first.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX2 and FMA
/// - All slice lengths match the provided dimensions
#[target_feature(enable = "avx2,fma")]
pub unsafe fn mat_mult_trans_cmplx_avx2(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    m: usize,
    n: usize,
    o: usize,
) {
    debug_check_shapes(a, b, c, m, n, o);
    drive_tiles_2x2(a, b, c, m, n, o, |a0, a1, b0, b1| unsafe {
        kernel_2x2_avx2(a0, a1, b0, b1, n)
    });
}
