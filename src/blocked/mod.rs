//! Tiled drivers for the complex transpose-multiply.
//!
//! These walk C in 2×2 tiles, call a microkernel from [`crate::kernels`]
//! for each one, and fall back to the basic loop for leftover rows and
//! columns.
//!
//! Available implementations:
//! - `tiled`: portable 2×2 kernel
//! - `tiled_avx2`: AVX2 + FMA 2×2 kernel (x86_64 only)

pub mod tiled;
#[cfg(target_arch = "x86_64")]
pub mod tiled_avx2;
