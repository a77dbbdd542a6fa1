//! Microkernels for the inner loop of the complex transpose-multiply.
//!
//! Each kernel computes a 2×2 tile of C from two rows of A and two rows of
//! B. They're called by the tile drivers in [`crate::blocked`], which also
//! take care of leftover rows and columns.
//!
//! Available kernels:
//! - `kernel_2x2`: portable scalar, same summation order as the basic loop
//! - `kernel_2x2_avx2`: AVX2 + FMA, 4 complex values per register

pub mod kernel_2x2;
#[cfg(target_arch = "x86_64")]
pub mod kernel_2x2_avx2;
