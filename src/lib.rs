//! Complex f32 transpose-multiply, built from scratch.
//!
//! Computes C = A * B^T where A is M×N, B is O×N and C is M×O, every entry
//! an interleaved `(re, im)` pair of f32. B is read row by row, so the
//! transpose never has to be materialized. It's the building block DSP code
//! reaches for when correlating a batch of signals against a bank of
//! reference rows.
//!
//! ## Usage
//!
//! ```
//! use cmatmul::mat_mult_trans_cmplx;
//!
//! let (m, n, o) = (64, 32, 48);
//! let a = vec![1.0f32; 2 * m * n];
//! let b = vec![1.0f32; 2 * o * n];
//! let mut c = vec![0.0f32; 2 * m * o];
//!
//! mat_mult_trans_cmplx(&a, &b, &mut c, m, n, o);
//! ```
//!
//! To pick an implementation yourself, pass a [`Strategy`]:
//!
//! ```
//! use cmatmul::{mat_mult_trans_cmplx_with, Strategy};
//!
//! let a = [1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, -1.0]; // 2×2
//! let b = [1.0, 0.0, 0.0, 1.0];                      // 1×2
//! let mut c = [0.0; 4];                              // 2×1
//!
//! mat_mult_trans_cmplx_with(Strategy::Basic, &a, &b, &mut c, 2, 2, 1);
//! assert_eq!(c, [0.0, 0.0, 2.0, 2.0]);
//! ```
//!
//! ## What's inside
//!
//! - Basic m-o-n triple loop (the reference)
//! - Portable 2×2 register tile, bit-identical to the basic loop
//! - 2×2 AVX2 + FMA kernel vectorized along the contraction dimension
//! - Row-partitioned multi-threading with rayon (feature `parallel`)
//! - Typed, shape-checked views for callers who want validation

pub mod blocked;
pub mod error;
pub mod kernels;
pub mod matrix;
#[cfg(feature = "parallel")]
pub mod threaded;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

pub use error::{ShapeError, UnknownStrategy};
pub use matrix::mult_cmplx::mat_mult_cmplx;
pub use matrix::trans_basic::mat_mult_trans_cmplx_basic;
pub use matrix::transpose::transpose_cmplx;
pub use matrix::view::{CmplxMatMut, CmplxMatRef};

/// Which implementation of the kernel to run.
///
/// All strategies produce the same result up to f32 rounding; `Basic` and
/// `Tiled` are bit-identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Plain m-o-n triple loop.
    Basic,
    /// Portable 2×2 register tile.
    Tiled,
    /// 2×2 AVX2 + FMA tile. Runs as `Tiled` when the CPU can't.
    Avx2,
    /// Fastest strategy the running CPU supports.
    #[default]
    Auto,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Basic,
        Strategy::Tiled,
        Strategy::Avx2,
        Strategy::Auto,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Basic => "basic",
            Strategy::Tiled => "tiled",
            Strategy::Avx2 => "avx2",
            Strategy::Auto => "auto",
        }
    }

    /// Maps this choice to the strategy that will actually run here.
    ///
    /// Never returns `Auto`, and only returns `Avx2` when the CPU has AVX2
    /// and FMA.
    pub fn resolve(self) -> Strategy {
        match self {
            Strategy::Auto if avx2_available() => Strategy::Avx2,
            Strategy::Auto => Strategy::Tiled,
            Strategy::Avx2 if !avx2_available() => Strategy::Tiled,
            other => other,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Whether the AVX2 kernel can run on this CPU. Detected once, then cached.
pub fn avx2_available() -> bool {
    static AVX2: OnceLock<bool> = OnceLock::new();

    *AVX2.get_or_init(|| {
        #[cfg(target_arch = "x86_64")]
        let available = is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma");
        #[cfg(not(target_arch = "x86_64"))]
        let available = false;

        tracing::debug!(avx2_fma = available, "detected CPU features for complex kernels");
        available
    })
}

/// Complex transpose-multiply: C = A * B^T
///
/// Picks the fastest available kernel for your CPU (AVX2 > tiled scalar).
/// Matrices are row-major with interleaved re/im: A is m×n, B is o×n,
/// C is m×o. C is overwritten, not accumulated into.
///
/// Buffer sizes are the caller's responsibility and are only checked by
/// debug assertions. Use [`try_mat_mult_trans_cmplx`] for validated input.
pub fn mat_mult_trans_cmplx(a: &[f32], b: &[f32], c: &mut [f32], m: usize, n: usize, o: usize) {
    mat_mult_trans_cmplx_with(Strategy::Auto, a, b, c, m, n, o);
}

/// Same as [`mat_mult_trans_cmplx`] with an explicit [`Strategy`].
pub fn mat_mult_trans_cmplx_with(
    strategy: Strategy,
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    m: usize,
    n: usize,
    o: usize,
) {
    match strategy.resolve() {
        Strategy::Basic => matrix::trans_basic::mat_mult_trans_cmplx_basic(a, b, c, m, n, o),
        Strategy::Avx2 => run_avx2(a, b, c, m, n, o),
        Strategy::Tiled | Strategy::Auto => {
            blocked::tiled::mat_mult_trans_cmplx_tiled(a, b, c, m, n, o)
        }
    }
}

#[cfg(target_arch = "x86_64")]
fn run_avx2(a: &[f32], b: &[f32], c: &mut [f32], m: usize, n: usize, o: usize) {
    // resolve() only hands out Avx2 after feature detection succeeded
    unsafe { blocked::tiled_avx2::mat_mult_trans_cmplx_avx2(a, b, c, m, n, o) }
}

#[cfg(not(target_arch = "x86_64"))]
fn run_avx2(a: &[f32], b: &[f32], c: &mut [f32], m: usize, n: usize, o: usize) {
    blocked::tiled::mat_mult_trans_cmplx_tiled(a, b, c, m, n, o)
}

/// Validated complex transpose-multiply on typed views.
///
/// Checks that A and B share their column count and that C is
/// `a.rows() × b.rows()`, then runs the kernel with `strategy`.
///
/// ```
/// use cmatmul::{try_mat_mult_trans_cmplx, CmplxMatMut, CmplxMatRef, Strategy};
///
/// let a = [2.0, 3.0];
/// let b = [4.0, -1.0];
/// let mut c = [0.0; 2];
///
/// let a = CmplxMatRef::new(&a, 1, 1)?;
/// let b = CmplxMatRef::new(&b, 1, 1)?;
/// let mut c = CmplxMatMut::new(&mut c, 1, 1)?;
///
/// try_mat_mult_trans_cmplx(a, b, &mut c, Strategy::Auto)?;
/// assert_eq!(c.at(0, 0), (11.0, 10.0));
/// # Ok::<(), cmatmul::ShapeError>(())
/// ```
pub fn try_mat_mult_trans_cmplx(
    a: CmplxMatRef<'_>,
    b: CmplxMatRef<'_>,
    c: &mut CmplxMatMut<'_>,
    strategy: Strategy,
) -> Result<(), ShapeError> {
    if a.cols() != b.cols() {
        return Err(ShapeError::ContractionMismatch {
            a_cols: a.cols(),
            b_cols: b.cols(),
        });
    }
    if c.rows() != a.rows() || c.cols() != b.rows() {
        return Err(ShapeError::OutputShape {
            expected_rows: a.rows(),
            expected_cols: b.rows(),
            rows: c.rows(),
            cols: c.cols(),
        });
    }

    let (m, n, o) = (a.rows(), a.cols(), b.rows());
    mat_mult_trans_cmplx_with(strategy, a.as_slice(), b.as_slice(), c.as_mut_slice(), m, n, o);
    Ok(())
}

/// Same as [`mat_mult_trans_cmplx`] but splits the rows of C across threads.
///
/// Thread count adapts to problem size - small products run on the calling
/// thread because the overhead isn't worth it.
#[cfg(feature = "parallel")]
pub fn mat_mult_trans_cmplx_parallel(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    m: usize,
    n: usize,
    o: usize,
    num_threads: usize,
) {
    threaded::rows_mt::mat_mult_trans_cmplx_mt(a, b, c, m, n, o, num_threads, Strategy::Auto);
}
