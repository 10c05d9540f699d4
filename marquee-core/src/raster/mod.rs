//! Text rasterization
//!
//! Turns a string into a [`Framebuffer`] using the 5x7 font. Every
//! character with a glyph occupies its glyph width plus one blank spacing
//! column, including the last one. Characters without a glyph occupy
//! nothing at all: no columns and no spacing.

mod framebuffer;

pub use framebuffer::{Framebuffer, MAX_FRAMEBUFFER_BLOCKS, MAX_FRAMEBUFFER_COLUMNS};

use crate::cascade::MATRIX_WIDTH;
use crate::font::{self, Glyph};

/// Rasterization errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RasterError {
    /// Text is too wide for the framebuffer
    OutOfMemory,
}

/// Glyphs of the printable characters of `text`, in order
pub fn glyphs(text: &str) -> impl Iterator<Item = &'static Glyph> + '_ {
    text.chars().filter_map(font::glyph_for)
}

/// Rendered width of `text` in columns
///
/// Sum over printable characters of glyph width + 1.
pub fn text_width(text: &str) -> usize {
    glyphs(text).map(|glyph| glyph.width() as usize + 1).sum()
}

/// Rasterize `text` into a new framebuffer
///
/// Empty text gives an empty framebuffer. The only failure is
/// [`RasterError::OutOfMemory`], raised before anything is drawn.
pub fn rasterize(text: &str) -> Result<Framebuffer, RasterError> {
    let mut fb = Framebuffer::with_width(text_width(text))?;

    for row in 0..MATRIX_WIDTH as u8 {
        let mut matrix = 0usize;
        let mut col = 0usize;

        for glyph in glyphs(text) {
            for font_col in 0..glyph.width() {
                if glyph.is_lit(row, font_col) {
                    fb.set_pixel(row, matrix * MATRIX_WIDTH + col);
                }
                col += 1;
                if col >= MATRIX_WIDTH {
                    col = 0;
                    matrix += 1;
                }
            }

            // Spacing column
            col += 1;
            if col >= MATRIX_WIDTH {
                col = 0;
                matrix += 1;
            }
        }
    }

    Ok(fb)
}
