//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! frame buffer construction ([`BufferTooSmall`]) and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`BufferTooSmall`] - Backing storage cannot hold the requested geometry
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus and pin errors
//!
//! Drawing never fails: coordinates outside the canvas are clipped silently.
//!
//! ## Example
//!
//! ```
//! use ssd1306_gfx::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(256, 64); // Wider than the controller
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Number of columns (segment outputs) driven by the SSD1306 controller
///
/// Panels narrower than this are wired to the middle of the segment range.
pub const NATIVE_COLUMNS: u16 = 128;

/// Maximum rows (common outputs) supported by SSD1306 controller
pub const MAX_ROWS: u16 = 64;

/// Minimum rows accepted by the multiplex ratio register
pub const MIN_ROWS: u16 = 16;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C/SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// A command was issued before [`Display::init`](crate::Display::init) completed
    NotInitialized,
    /// Buffer is too small for the display
    ///
    /// The provided buffer must be at least `dimensions.buffer_size()` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::NotInitialized => write!(f, "Display not initialized"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

impl<I: DisplayInterface> From<BufferTooSmall> for Error<I> {
    fn from(err: BufferTooSmall) -> Self {
        Self::BufferTooSmall {
            required: err.required,
            provided: err.provided,
        }
    }
}

/// Backing storage is too small for the requested pixel geometry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferTooSmall {
    /// Required buffer size in bytes
    pub required: usize,
    /// Provided buffer size in bytes
    pub provided: usize,
}

impl core::fmt::Display for BufferTooSmall {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Buffer too small: required {} bytes, provided {}",
            self.required, self.provided
        )
    }
}

impl core::error::Error for BufferTooSmall {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels requested
        width: u16,
        /// Height in pixels requested
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (width 1..={NATIVE_COLUMNS}, height {MIN_ROWS}..={MAX_ROWS})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_buffer_too_small_message() {
        let err = BufferTooSmall {
            required: 512,
            provided: 10,
        };
        assert_eq!(
            err.to_string(),
            "Buffer too small: required 512 bytes, provided 10"
        );
    }

    #[test]
    fn test_builder_error_message_names_limits() {
        let err = BuilderError::InvalidDimensions {
            width: 200,
            height: 8,
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions 200x8 (width 1..=128, height 16..=64)"
        );
    }
}
