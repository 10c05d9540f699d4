//! Variable-width 5x7 font
//!
//! Each glyph is a run of column bytes, left to right. Bit `k` of a column
//! byte lights pixel row `k` (row 0 at the top). Glyphs are 1 to 7 columns
//! wide and carry no spacing of their own; the rasterizer inserts one blank
//! column after every character.
//!
//! The table covers character codes 32..=127. Anything else has no glyph
//! and is skipped by the rasterizer.

mod glyphs;

pub use glyphs::FONT_5X7;

/// First character code with a glyph (space)
pub const FIRST_CODE: u8 = 32;

/// Last character code with a glyph
pub const LAST_CODE: u8 = 127;

/// Widest glyph in the table, in columns
pub const MAX_GLYPH_WIDTH: u8 = 7;

/// A single character bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    columns: &'static [u8],
}

impl Glyph {
    /// Create a glyph from its column bytes
    pub const fn new(columns: &'static [u8]) -> Self {
        Self { columns }
    }

    /// Width in columns
    #[inline]
    pub const fn width(&self) -> u8 {
        self.columns.len() as u8
    }

    /// Column bytes, left to right
    #[inline]
    pub const fn columns(&self) -> &'static [u8] {
        self.columns
    }

    /// Whether the pixel at (`row`, `column`) is lit
    #[inline]
    pub fn is_lit(&self, row: u8, column: u8) -> bool {
        row < 8
            && self
                .columns
                .get(column as usize)
                .is_some_and(|bits| bits & (1 << row) != 0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Glyph {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Glyph({=[u8]:#x})", self.columns);
    }
}

/// Look up the glyph for a character code
///
/// Returns `None` for codes outside 32..=127.
pub fn lookup(code: u8) -> Option<&'static Glyph> {
    if (FIRST_CODE..=LAST_CODE).contains(&code) {
        FONT_5X7.get((code - FIRST_CODE) as usize)
    } else {
        None
    }
}

/// Look up the glyph for a `char`
///
/// Non-ASCII characters have no glyph.
pub fn glyph_for(c: char) -> Option<&'static Glyph> {
    u8::try_from(c).ok().and_then(lookup)
}
