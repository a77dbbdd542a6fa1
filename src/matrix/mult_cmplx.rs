use super::transpose::transpose_cmplx;
use crate::{Strategy, mat_mult_trans_cmplx_with};

/// Complex matrix multiplication: C = A * B
///
/// Here B is stored N×O (not O×N as in the transpose-multiply). B is
/// transposed once into `scratch`, then the transpose-multiply kernel runs
/// on that, so both operands are again read with unit stride. `scratch` is
/// caller-provided to keep the call allocation-free.
///
/// # Arguments
///
/// * `a` - Matrix A (m × n complex), row-major, interleaved re/im
/// * `b` - Matrix B (n × o complex), row-major, interleaved re/im
/// * `c` - Matrix C (m × o complex), overwritten with A * B
/// * `scratch` - At least `2 * n * o` f32, contents are clobbered
/// * `m` - Rows of A and C
/// * `n` - Columns of A, rows of B
/// * `o` - Columns of B and C
///
/// # Example
///
/// ```
/// use cmatmul::{mat_mult_cmplx, Strategy};
///
/// // A = [(1+i) (2)], B = [[(i)], [(3)]]
/// let a = [1.0, 1.0, 2.0, 0.0];
/// let b = [0.0, 1.0, 3.0, 0.0];
/// let mut c = [0.0; 2];
/// let mut scratch = [0.0; 4];
///
/// mat_mult_cmplx(&a, &b, &mut c, &mut scratch, 1, 2, 1, Strategy::Basic);
///
/// // (1+i)*i + 2*3 = (-1 + i) + 6
/// assert_eq!(c, [5.0, 1.0]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn mat_mult_cmplx(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    scratch: &mut [f32],
    m: usize,
    n: usize,
    o: usize,
    strategy: Strategy,
) {
    let bt = &mut scratch[..2 * n * o];
    transpose_cmplx(b, bt, n, o);
    mat_mult_trans_cmplx_with(strategy, a, bt, c, m, n, o);
}
