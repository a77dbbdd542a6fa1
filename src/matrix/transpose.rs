/// Transpose an interleaved complex matrix: dst = src^T
///
/// Converts from row-major (rows × cols) to row-major (cols × rows).
/// Each (re, im) pair moves as a unit; nothing is conjugated.
///
/// # Arguments
///
/// * `src` - Source matrix (rows × cols complex), row-major
/// * `dst` - Destination matrix (cols × rows complex), row-major
/// * `rows` - Number of rows in src
/// * `cols` - Number of columns in src
///
/// # Example
///
/// ```
/// use cmatmul::matrix::transpose::transpose_cmplx;
///
/// let src = vec![1.0, 1.0,  2.0, 2.0,  3.0, 3.0,   // 2×3 complex matrix
///                4.0, 4.0,  5.0, 5.0,  6.0, 6.0];
/// let mut dst = vec![0.0; 12];                       // will be 3×2
///
/// transpose_cmplx(&src, &mut dst, 2, 3);
///
/// assert_eq!(dst, vec![1.0, 1.0,  4.0, 4.0,          // 3×2 complex matrix
///                      2.0, 2.0,  5.0, 5.0,
///                      3.0, 3.0,  6.0, 6.0]);
/// ```
pub fn transpose_cmplx(src: &[f32], dst: &mut [f32], rows: usize, cols: usize) {
    debug_assert!(src.len() >= 2 * rows * cols, "src too small for {}x{}", rows, cols);
    debug_assert!(dst.len() >= 2 * rows * cols, "dst too small for {}x{}", cols, rows);

    for i in 0..rows {
        for j in 0..cols {
            let from = (i * cols + j) * 2;
            let to = (j * rows + i) * 2;
            dst[to] = src[from];
            dst[to + 1] = src[from + 1];
        }
    }
}
