use super::{debug_check_shapes, dot_trans_cmplx, row, row_mut};

/// Complex transpose-multiply using the plain m-o-n loop order: C = A * B^T
///
/// Both A and B are walked along their rows with unit stride, so no
/// transposed copy of B is ever built. Each output entry gets its own
/// accumulator pair, reset to (0, 0), and the N products are summed in
/// increasing n.
///
/// This is the reference every other strategy is tested against.
///
/// # Arguments
///
/// * `a` - Matrix A (m × n complex), row-major, interleaved re/im
/// * `b` - Matrix B (o × n complex), row-major, interleaved re/im
/// * `c` - Matrix C (m × o complex), overwritten with A * B^T
/// * `m` - Rows of A and C
/// * `n` - Columns of A and B (contraction dimension)
/// * `o` - Rows of B, columns of C
///
/// # Example
///
/// ```
/// use cmatmul::matrix::trans_basic::mat_mult_trans_cmplx_basic;
///
/// let a = [2.0, 3.0];  // (2 + 3i)
/// let b = [4.0, -1.0]; // (4 - i)
/// let mut c = [0.0; 2];
///
/// mat_mult_trans_cmplx_basic(&a, &b, &mut c, 1, 1, 1);
///
/// assert_eq!(c, [11.0, 10.0]);
/// ```
pub fn mat_mult_trans_cmplx_basic(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    m: usize,
    n: usize,
    o: usize,
) {
    debug_check_shapes(a, b, c, m, n, o);

    for i in 0..m {
        let a_row = row(a, i, n);
        let c_row = row_mut(c, i, o);
        for (j, out) in c_row.chunks_exact_mut(2).enumerate() {
            let sum = dot_trans_cmplx(a_row, row(b, j, n));
            out.copy_from_slice(&sum);
        }
    }
}
