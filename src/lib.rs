//! matrix-kernel: dense-matrix arithmetic for a calculator backend.
//!
//! This crate provides the numeric core behind a matrix calculator UI:
//! flat-buffer marshaling into a dense row-major [`Matrix`], the four
//! arithmetic operations (add, subtract, multiply, divide), and Gauss-Jordan
//! inversion with singularity detection backing division.
//!
//! The host application and its call boundary are external collaborators;
//! this crate only sees numeric buffers plus their declared dimensions and
//! hands back a result buffer or a typed [`KernelError`].
pub mod config;
pub mod error;
pub mod invert;
pub mod kernel;
pub mod math;

pub use config::KernelConfig;
pub use error::KernelError;
pub use math::Matrix;
