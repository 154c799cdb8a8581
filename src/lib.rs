//! SSD1306 OLED Display Driver
//!
//! A driver for the SSD1306 monochrome OLED controller supporting panels up to
//! 128x64 pixels, with a local frame buffer, a primitive rasterizer and a
//! 2-bit bitmap font renderer.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support, over I2C or 4-wire SPI
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Configurable panel dimensions, centered on narrow panels
//! - Lines, rectangles, circles and triangles, outlined or filled
//! - Text from packed glyph tables with palettes and transparency
//! - Contrast, inversion and 180° rotation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! use ssd1306_gfx::{Builder, Color, Dimensions, Display, I2cInterface, Primitives};
//!
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let i2c = MockI2c;
//! # let mut delay = MockDelay;
//! let interface = I2cInterface::new(i2c);
//! let dims = match Dimensions::new(128, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = match Display::new(interface, config, [0u8; 1024]) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! let _ = display.init(&mut delay);
//!
//! display.rect(0, 0, 128, 64, Color::On);
//! display.fill_circle(64, 32, 12, Color::On);
//! let _ = display.show();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Packed monochrome frame buffer
pub mod buffer;
/// Monochrome pixel color
pub mod color;
/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Line, shape and fill rasterization
pub mod draw;
/// Error types for the driver
pub mod error;
/// Bitmap font rendering
pub mod font;
/// Hardware interface abstraction
pub mod interface;
/// Panel orientation
pub mod rotation;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use buffer::PixelBuffer;
pub use color::Color;
pub use config::{Builder, Config, Dimensions, MAX_ROWS, MIN_ROWS, NATIVE_COLUMNS, Rotation};
pub use display::{Display, PowerState};
pub use draw::{PixelSink, Primitives};
pub use error::{BufferTooSmall, BuilderError, Error};
pub use font::{FALLBACK_CHAR, Font, Glyph, GlyphTable, Palette, TextWriter};
pub use interface::InterfaceError;
pub use interface::{DEFAULT_I2C_ADDRESS, DisplayInterface, I2cInterface, SpiInterface};
