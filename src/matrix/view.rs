//! Typed views over interleaved complex matrices.
//!
//! The views own nothing; they pair a caller-owned `f32` buffer with its
//! shape so that element access goes through the layout formula instead of
//! hand-written offsets.

use num_complex::Complex32;

use crate::error::{Result, ShapeError};

fn check_len(name: &'static str, actual: usize, rows: usize, cols: usize) -> Result<()> {
    let expected = 2 * rows * cols;
    if actual != expected {
        return Err(ShapeError::BufferLength {
            name,
            rows,
            cols,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Read-only view of a `rows × cols` complex matrix.
#[derive(Debug, Clone, Copy)]
pub struct CmplxMatRef<'a> {
    data: &'a [f32],
    rows: usize,
    cols: usize,
}

impl<'a> CmplxMatRef<'a> {
    /// Wraps `data`, which must hold exactly `2 * rows * cols` values.
    pub fn new(data: &'a [f32], rows: usize, cols: usize) -> Result<Self> {
        check_len("CmplxMatRef", data.len(), rows, cols)?;
        Ok(Self { data, rows, cols })
    }

    /// Wraps a slice of `Complex32`, reinterpreted as interleaved `f32`.
    ///
    /// ```
    /// use cmatmul::CmplxMatRef;
    /// use num_complex::Complex32;
    ///
    /// let data = [Complex32::new(1.0, 2.0), Complex32::new(3.0, 4.0)];
    /// let view = CmplxMatRef::from_complex(&data, 1, 2).unwrap();
    /// assert_eq!(view.at(0, 1), (3.0, 4.0));
    /// ```
    pub fn from_complex(data: &'a [Complex32], rows: usize, cols: usize) -> Result<Self> {
        Self::new(bytemuck::cast_slice(data), rows, cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }

    /// Entry (row, col) as `(re, im)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> (f32, f32) {
        debug_assert!(row < self.rows && col < self.cols);
        let idx = (row * self.cols + col) * 2;
        (self.data[idx], self.data[idx + 1])
    }

    /// Row `r` as `2 * cols` interleaved values.
    #[inline]
    pub fn row(&self, r: usize) -> &'a [f32] {
        super::row(self.data, r, self.cols)
    }
}

/// Writable view of a `rows × cols` complex matrix.
#[derive(Debug)]
pub struct CmplxMatMut<'a> {
    data: &'a mut [f32],
    rows: usize,
    cols: usize,
}

impl<'a> CmplxMatMut<'a> {
    /// Wraps `data`, which must hold exactly `2 * rows * cols` values.
    pub fn new(data: &'a mut [f32], rows: usize, cols: usize) -> Result<Self> {
        check_len("CmplxMatMut", data.len(), rows, cols)?;
        Ok(Self { data, rows, cols })
    }

    pub fn from_complex_mut(data: &'a mut [Complex32], rows: usize, cols: usize) -> Result<Self> {
        Self::new(bytemuck::cast_slice_mut(data), rows, cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn as_slice(&self) -> &[f32] {
        &*self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut *self.data
    }

    /// Reborrows as a read-only view.
    pub fn as_view(&self) -> CmplxMatRef<'_> {
        CmplxMatRef {
            data: &*self.data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> (f32, f32) {
        self.as_view().at(row, col)
    }

    /// Writes `(re, im)` to entry (row, col).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: (f32, f32)) {
        debug_assert!(row < self.rows && col < self.cols);
        let idx = (row * self.cols + col) * 2;
        self.data[idx] = value.0;
        self.data[idx + 1] = value.1;
    }
}
