//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and matrix operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors while validating matrix dimensions
//! - [`Error`] - Construction and scan errors of a [`LedMatrix`](crate::LedMatrix)
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level pin errors
//!
//! Drawing never fails: coordinates outside the matrix are clipped, not reported.
//!
//! ## Example
//!
//! ```
//! use led_matrix::{BuilderError, Dimensions};
//!
//! // No anodes
//! let result = Dimensions::new(0, 8);
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { .. })));
//!
//! // More cathodes than the pixel buffer can address
//! let result = Dimensions::new(8, 33);
//! assert!(result.is_err());
//! ```

use crate::interface::MatrixInterface;

/// Maximum number of anode lines (physical columns) a matrix can drive
///
/// The pixel buffer is pre-allocated for this many columns.
pub const MAX_ANODES: u16 = 32;

/// Maximum number of cathode lines (physical rows) a matrix can drive
///
/// Each buffer column is one `u32`, so this cannot exceed 32.
pub const MAX_CATHODES: u16 = 32;

/// Errors that can occur when driving the matrix
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: MatrixInterface> {
    /// Interface error (GPIO)
    ///
    /// Wraps the underlying hardware error from the [`MatrixInterface`] implementation.
    Interface(I::Error),
    /// The interface exposes a line count the pixel buffer cannot address
    ///
    /// Counts must satisfy:
    /// - 1 <= anodes <= MAX_ANODES (32)
    /// - 1 <= cathodes <= MAX_CATHODES (32)
    InvalidDimensions {
        /// Number of anode lines reported by the interface
        anodes: usize,
        /// Number of cathode lines reported by the interface
        cathodes: usize,
    },
}

impl<I: MatrixInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::InvalidDimensions { anodes, cathodes } => write!(
                f,
                "Invalid dimensions: {anodes} anodes x {cathodes} cathodes (max {MAX_ANODES}x{MAX_CATHODES})"
            ),
        }
    }
}

impl<I: MatrixInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of anode lines requested
        anodes: u16,
        /// Number of cathode lines requested
        cathodes: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { anodes, cathodes } => write!(
                f,
                "Invalid dimensions {anodes}x{cathodes} (min 1x1, max {MAX_ANODES}x{MAX_CATHODES})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
