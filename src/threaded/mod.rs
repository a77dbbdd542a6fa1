//! Multi-threaded complex transpose-multiply.
//!
//! Wraps the single-threaded strategies with parallel execution across
//! rows of C using rayon. Each worker writes its own block of rows, so the
//! workers share nothing mutable.
//!
//! Available implementations:
//! - `rows_mt`: row partitions, any [`Strategy`](crate::Strategy) per partition

pub mod rows_mt;
