//! Bitmap text rendering with 2-bit glyph samples
//!
//! Glyphs are stored row by row. Every pixel is a 2-bit sample and four
//! samples share a byte, least significant pair first, so a row of a glyph
//! `width` pixels wide occupies `width.div_ceil(4)` bytes. A [`Palette`]
//! maps each of the four sample values to a color, or to nothing, in which
//! case the pixel underneath is left alone.
//!
//! Font tables usually come as `(width, bytes)` pairs with glyphs at most
//! four pixels wide, one byte per row; [`Glyph::from_rows`] loads that form
//! directly and takes the height from the number of bytes. [`Glyph::new`]
//! takes an explicit height for wider glyphs packed several bytes per row.
//!
//! ## Example
//!
//! ```
//! use ssd1306_gfx::{Color, Glyph, GlyphTable, Palette, PixelBuffer, TextWriter};
//!
//! // A 2x2 checker: sample 0 lit, sample 2 dark
//! const CHECKER: Glyph<'static> = Glyph::from_rows(2, &[0b1000, 0b0010]);
//! const FONT: GlyphTable<'static> = GlyphTable::new(&[('#', CHECKER), ('?', CHECKER)]);
//!
//! let mut canvas = match PixelBuffer::new(16, 16, [0u8; 32]) {
//!     Ok(canvas) => canvas,
//!     Err(_) => return,
//! };
//! let writer = TextWriter::new(&FONT);
//! let end = writer.draw_string(&mut canvas, "##", 0, 0);
//!
//! assert_eq!(end, 4);
//! assert!(canvas.get(0, 0));
//! assert!(!canvas.get(1, 0));
//! assert!(canvas.get(3, 1));
//! ```

use log::trace;

use crate::color::Color;
use crate::draw::PixelSink;

/// Character drawn in place of code points missing from a font
pub const FALLBACK_CHAR: char = '?';

/// One character's bitmap
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph<'a> {
    width: u8,
    height: u8,
    data: &'a [u8],
}

impl<'a> Glyph<'a> {
    /// Create a glyph from packed row data
    ///
    /// `data` holds `height` rows of `width.div_ceil(4)` bytes each. Rows
    /// missing from a short slice are not drawn.
    pub const fn new(width: u8, height: u8, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Create a glyph whose height is however many full rows `data` holds
    pub const fn from_rows(width: u8, data: &'a [u8]) -> Self {
        let row_len = (width as usize).div_ceil(4);
        let rows = if row_len == 0 { 0 } else { data.len() / row_len };
        let height = if rows > u8::MAX as usize { u8::MAX } else { rows as u8 };
        Self::new(width, height, data)
    }

    /// Width in pixels, which is also the horizontal advance
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Bytes occupied by one row
    pub const fn row_len(&self) -> usize {
        (self.width as usize).div_ceil(4)
    }

    /// The 2-bit sample at column `col` of row `row`
    ///
    /// Returns `None` outside the glyph or past the end of its data.
    pub fn sample(&self, col: u8, row: u8) -> Option<u8> {
        if col >= self.width || row >= self.height {
            return None;
        }
        let col = usize::from(col);
        let index = usize::from(row) * self.row_len() + col / 4;
        let byte = self.data.get(index)?;
        Some((byte >> ((col % 4) * 2)) & 0b11)
    }
}

/// Source of glyphs keyed by character
pub trait Font {
    /// Look up the glyph for `c`
    fn glyph(&self, c: char) -> Option<Glyph<'_>>;

    /// Line height in pixels
    fn height(&self) -> u8;
}

/// A font backed by a static table of (character, glyph) pairs
#[derive(Clone, Copy, Debug)]
pub struct GlyphTable<'a> {
    glyphs: &'a [(char, Glyph<'a>)],
}

impl<'a> GlyphTable<'a> {
    /// Wrap a glyph table
    pub const fn new(glyphs: &'a [(char, Glyph<'a>)]) -> Self {
        Self { glyphs }
    }
}

impl Font for GlyphTable<'_> {
    fn glyph(&self, c: char) -> Option<Glyph<'_>> {
        self.glyphs
            .iter()
            .find(|(code, _)| *code == c)
            .map(|(_, glyph)| *glyph)
    }

    fn height(&self) -> u8 {
        self.glyphs
            .iter()
            .map(|(_, glyph)| glyph.height())
            .max()
            .unwrap_or(0)
    }
}

/// Mapping from 2-bit glyph samples to colors
///
/// `None` entries are transparent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette([Option<Color>; 4]);

impl Palette {
    /// Opaque palette: samples 0 and 1 take `foreground`, 2 and 3 take `background`
    pub const fn new(foreground: Color, background: Color) -> Self {
        Self([
            Some(foreground),
            Some(foreground),
            Some(background),
            Some(background),
        ])
    }

    /// Palette that only paints foreground samples
    pub const fn transparent(foreground: Color) -> Self {
        Self([Some(foreground), Some(foreground), None, None])
    }

    /// Palette with an explicit entry for every sample value
    pub const fn from_entries(entries: [Option<Color>; 4]) -> Self {
        Self(entries)
    }

    /// Color for a sample value, `None` when transparent
    pub fn entry(&self, sample: u8) -> Option<Color> {
        self.0[usize::from(sample & 0b11)]
    }

    /// Replace the entry for a sample value
    pub fn set_entry(&mut self, sample: u8, color: Option<Color>) {
        self.0[usize::from(sample & 0b11)] = color;
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Color::On, Color::Off)
    }
}

/// Draws text from a [`Font`] onto any [`PixelSink`]
#[derive(Clone, Copy, Debug)]
pub struct TextWriter<'f, F: Font> {
    font: &'f F,
    palette: Palette,
    fallback: char,
}

impl<'f, F: Font> TextWriter<'f, F> {
    /// Writer using the default palette and `?` as fallback
    pub fn new(font: &'f F) -> Self {
        Self {
            font,
            palette: Palette::default(),
            fallback: FALLBACK_CHAR,
        }
    }

    /// Use a different palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Use a different fallback character
    pub fn with_fallback(mut self, fallback: char) -> Self {
        self.fallback = fallback;
        self
    }

    /// Set the foreground and background colors
    pub fn set_colors(&mut self, foreground: Color, background: Color) {
        self.palette = Palette::new(foreground, background);
    }

    /// Current palette
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// The font being drawn from
    pub fn font(&self) -> &'f F {
        self.font
    }

    /// Draw `text` left to right starting with its top-left corner at (x, y)
    ///
    /// Characters missing from the font are drawn as the fallback character,
    /// and skipped without advancing if that is missing too. Returns the x
    /// coordinate following the last glyph.
    pub fn draw_string<S>(&self, sink: &mut S, text: &str, x: i32, y: i32) -> i32
    where
        S: PixelSink + ?Sized,
    {
        let mut cursor = x;
        for c in text.chars() {
            let glyph = match self.font.glyph(c) {
                Some(glyph) => glyph,
                None => {
                    trace!("no glyph for {:?}, using {:?}", c, self.fallback);
                    match self.font.glyph(self.fallback) {
                        Some(glyph) => glyph,
                        None => continue,
                    }
                }
            };
            self.draw_glyph(sink, glyph, cursor, y);
            cursor = cursor.saturating_add(i32::from(glyph.width()));
        }
        cursor
    }

    /// Draw a single character with its top-left corner at (x, y)
    ///
    /// Missing characters draw nothing. Returns the glyph width, or 0 when
    /// nothing was drawn.
    pub fn draw_char<S>(&self, sink: &mut S, c: char, x: i32, y: i32) -> u8
    where
        S: PixelSink + ?Sized,
    {
        match self.font.glyph(c) {
            Some(glyph) => {
                self.draw_glyph(sink, glyph, x, y);
                glyph.width()
            }
            None => 0,
        }
    }

    /// Width in pixels `text` would occupy, applying the same fallback as drawing
    pub fn measure(&self, text: &str) -> u32 {
        text.chars()
            .filter_map(|c| self.font.glyph(c).or_else(|| self.font.glyph(self.fallback)))
            .map(|glyph| u32::from(glyph.width()))
            .sum()
    }

    fn draw_glyph<S>(&self, sink: &mut S, glyph: Glyph<'_>, x: i32, y: i32)
    where
        S: PixelSink + ?Sized,
    {
        for row in 0..glyph.height() {
            for col in 0..glyph.width() {
                let Some(sample) = glyph.sample(col, row) else {
                    return;
                };
                let Some(color) = self.palette.entry(sample) else {
                    continue;
                };
                // Pixels past the end of the coordinate range are off any canvas
                if let (Some(px), Some(py)) = (
                    x.checked_add(i32::from(col)),
                    y.checked_add(i32::from(row)),
                ) {
                    sink.set_pixel(px, py, color);
                }
            }
        }
    }
}
