//! Color type for monochrome OLED panels
//!
//! Each pixel is a single bit in the frame buffer: set bits light the pixel,
//! clear bits leave it dark (before any display inversion).
//!
//! | Color | Buffer bit | Fill byte |
//! |-------|------------|-----------|
//! | Off   | 0          | 0x00      |
//! | On    | 1          | 0xFF      |
//!
//! ## Example
//!
//! ```
//! use ssd1306_gfx::Color;
//!
//! assert_eq!(Color::Off.fill_byte(), 0x00);
//! assert_eq!(Color::On.fill_byte(), 0xFF);
//! assert_eq!(Color::from(true), Color::On);
//! ```

/// Pixel color of a monochrome display
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Color {
    /// Dark pixel
    #[default]
    Off,
    /// Lit pixel
    On,
}

impl Color {
    /// Byte value that sets all eight pixels of a page column to this color
    pub fn fill_byte(self) -> u8 {
        match self {
            Self::Off => 0x00,
            Self::On => 0xFF,
        }
    }

    /// Whether the pixel is lit
    pub fn is_on(self) -> bool {
        self == Self::On
    }

    /// The opposite color
    pub fn invert(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        Self::from(color.is_on())
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::BinaryColor {
    fn from(color: Color) -> Self {
        Self::from(color.is_on())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_round_trip() {
        assert_eq!(Color::On.invert(), Color::Off);
        assert_eq!(Color::Off.invert().invert(), Color::Off);
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn test_binary_color_conversion() {
        use embedded_graphics_core::pixelcolor::BinaryColor;

        assert_eq!(Color::from(BinaryColor::On), Color::On);
        assert_eq!(BinaryColor::from(Color::Off), BinaryColor::Off);
    }
}
