//! Row-partitioned multi-threaded complex transpose-multiply.

use rayon::prelude::*;

use crate::matrix::debug_check_shapes;
use crate::{Strategy, mat_mult_trans_cmplx_with};

/// Multi-threaded complex transpose-multiply.
///
/// Splits the rows of C into contiguous partitions, with each partition
/// running the chosen single-threaded strategy on its rows. Partition count
/// adapts to problem size:
/// - < 25M FLOPs: 1 partition (runs on the calling thread)
/// - < 75M FLOPs: 2 partitions
/// - Otherwise: up to `num_threads`
///
/// # Arguments
///
/// * `num_threads` - Maximum partitions (actual may be fewer for small products)
/// * `strategy` - Kernel each partition runs
#[allow(clippy::too_many_arguments)]
pub fn mat_mult_trans_cmplx_mt(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    m: usize,
    n: usize,
    o: usize,
    num_threads: usize,
    strategy: Strategy,
) {
    let partitions = choose_thread_count(m, n, o, num_threads);
    mat_mult_trans_cmplx_partitioned(a, b, c, m, n, o, partitions, strategy);
}

/// Runs the product with exactly `partitions` row ranges (at most one per row).
///
/// Each partition owns a disjoint block of rows of C and reads only the
/// matching rows of A plus all of B, so no synchronization is needed beyond
/// rayon's join at the end.
#[allow(clippy::too_many_arguments)]
pub fn mat_mult_trans_cmplx_partitioned(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    m: usize,
    n: usize,
    o: usize,
    partitions: usize,
    strategy: Strategy,
) {
    debug_check_shapes(a, b, c, m, n, o);

    // Resolve once so workers don't each go through detection
    let strategy = strategy.resolve();

    if partitions <= 1 || m == 0 || o == 0 {
        mat_mult_trans_cmplx_with(strategy, a, b, c, m, n, o);
        return;
    }

    let rows_per_part = m.div_ceil(partitions);
    let c_row_len = o * 2;
    let a_row_len = n * 2;

    c[..m * c_row_len]
        .par_chunks_mut(rows_per_part * c_row_len)
        .enumerate()
        .for_each(|(part, c_part)| {
            let row_start = part * rows_per_part;
            let rows = c_part.len() / c_row_len;
            let a_part = &a[row_start * a_row_len..(row_start + rows) * a_row_len];

            mat_mult_trans_cmplx_with(strategy, a_part, b, c_part, rows, n, o);
        });
}

/// Number of partitions worth using for an m×n×o complex product.
///
/// One complex multiply-accumulate counts as 8 FLOPs. Never more than one
/// partition per 16 rows, never more than `max_threads`, never zero.
pub fn choose_thread_count(m: usize, n: usize, o: usize, max_threads: usize) -> usize {
    let flops = 8.0 * (m * n * o) as f64;

    const SINGLE_THREAD_THRESHOLD: f64 = 25_000_000.0;
    const TWO_THREAD_THRESHOLD: f64 = 75_000_000.0;

    let optimal_threads = if flops < SINGLE_THREAD_THRESHOLD {
        1
    } else if flops < TWO_THREAD_THRESHOLD {
        2
    } else {
        max_threads
    };

    let threads_by_rows = (m / 16).max(1);

    optimal_threads.min(threads_by_rows).min(max_threads).max(1)
}
