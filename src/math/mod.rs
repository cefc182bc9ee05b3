//! Small ndarray-like dense container used throughout the crate.
//!
//! Provides `Matrix`, a lightweight 2D container over a flat row-major
//! buffer. The type is intentionally small and dependency-light so the
//! kernel stays portable and easy to test.
pub mod matrix;

pub use matrix::Matrix;
