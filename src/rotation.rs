//! Panel orientation
//!
//! The SSD1306 rotates the image in hardware: the segment remap bit mirrors
//! columns and the COM scan direction bit mirrors rows. Flipping both gives a
//! 180° rotation, which is the only rotation the controller can do without
//! rearranging the frame buffer.
//!
//! Both bits must always be written together, otherwise the image is mirrored
//! on one axis only.
//!
//! ## Example
//!
//! ```
//! use ssd1306_gfx::Rotation;
//!
//! // Upright: column 127 mapped to SEG0, COM scanned bottom-up
//! assert_eq!(Rotation::Rotate0.segment_remap(), 0xA1);
//! assert_eq!(Rotation::Rotate0.com_scan_direction(), 0xC8);
//!
//! // Upside down: both mirrors disabled
//! assert_eq!(Rotation::Rotate180.segment_remap(), 0xA0);
//! assert_eq!(Rotation::Rotate180.com_scan_direction(), 0xC0);
//! ```

use crate::command::{SET_COM_OUT_DIR, SET_SEG_REMAP};

/// Display rotation relative to the panel's upright orientation
///
/// Corresponds to the controller's 0/1 rotation flag: flag 1 (both mirror
/// bits set) is [`Rotation::Rotate0`], flag 0 is [`Rotation::Rotate180`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 180 degrees
    Rotate180,
}

impl Rotation {
    fn flag(self) -> u8 {
        match self {
            Self::Rotate0 => 1,
            Self::Rotate180 => 0,
        }
    }

    /// Segment remap command byte for this orientation
    pub fn segment_remap(self) -> u8 {
        SET_SEG_REMAP | self.flag()
    }

    /// COM output scan direction command byte for this orientation
    pub fn com_scan_direction(self) -> u8 {
        SET_COM_OUT_DIR | (self.flag() << 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_upright() {
        assert_eq!(Rotation::default(), Rotation::Rotate0);
    }

    #[test]
    fn test_bits_flip_together() {
        for rotation in [Rotation::Rotate0, Rotation::Rotate180] {
            let remapped = rotation.segment_remap() & 0x01 != 0;
            let reversed = rotation.com_scan_direction() & 0x08 != 0;
            assert_eq!(remapped, reversed);
        }
    }

    #[test]
    fn test_only_low_bits_change() {
        assert_eq!(Rotation::Rotate180.segment_remap() & 0xFE, SET_SEG_REMAP);
        assert_eq!(Rotation::Rotate0.com_scan_direction() & 0xF7, SET_COM_OUT_DIR);
    }
}
