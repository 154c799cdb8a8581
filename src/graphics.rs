//! Graphics support via embedded-graphics
//!
//! [`PixelBuffer`] and [`Display`] implement
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) with
//! [`Color`] as the pixel color, so embedded-graphics primitives, fonts and
//! images draw straight into the frame buffer. `BinaryColor` converts into
//! [`Color`] for styles written against the stock monochrome color type.
//!
//! ## Example
//!
//! ```rust
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle},
//!     text::Text,
//! };
//! use ssd1306_gfx::{Color, PixelBuffer};
//!
//! let mut canvas = match PixelBuffer::new(128, 32, [0u8; 512]) {
//!     Ok(canvas) => canvas,
//!     Err(_) => return,
//! };
//!
//! let _ = Circle::new(Point::new(2, 2), 20)
//!     .into_styled(PrimitiveStyle::with_stroke(Color::On, 1))
//!     .draw(&mut canvas);
//!
//! let style = MonoTextStyle::new(&FONT_6X10, Color::On);
//! let _ = Text::new("Hello", Point::new(30, 20), style).draw(&mut canvas);
//! ```

use core::convert::Infallible;

use embedded_graphics_core::Pixel;
use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Point, Size};
use embedded_graphics_core::primitives::Rectangle;

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::display::Display;
use crate::interface::DisplayInterface;

impl<B> DrawTarget for PixelBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.set_pixel(x, y, color);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&Rectangle::new(Point::zero(), self.size()));
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        for y in area.top_left.y..=bottom_right.y {
            for x in area.top_left.x..=bottom_right.x {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl<B> OriginDimensions for PixelBuffer<B>
where
    B: AsRef<[u8]>,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

impl<I, B> DrawTarget for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.buffer_mut().draw_iter(pixels)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.buffer_mut().fill_solid(area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.buffer_mut().fill(color);
        Ok(())
    }
}

impl<I, B> OriginDimensions for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        self.buffer().size()
    }
}
