//! Text framebuffer
//!
//! An 8-row bit matrix addressed by absolute column. Storage is one byte
//! per (row, matrix block): column `c` lives in bit `c % 8` of block
//! `c / 8`. That byte is exactly what a row register of the chip showing
//! the block expects.

use heapless::Vec;

use super::RasterError;
use crate::cascade::MATRIX_WIDTH;

/// Capacity in 8-column matrix blocks
pub const MAX_FRAMEBUFFER_BLOCKS: usize = 128;

/// Capacity in columns
pub const MAX_FRAMEBUFFER_COLUMNS: usize = MAX_FRAMEBUFFER_BLOCKS * MATRIX_WIDTH;

/// Rasterized text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// One row-plane per pixel row, one byte per block
    rows: [Vec<u8, MAX_FRAMEBUFFER_BLOCKS>; MATRIX_WIDTH],
    /// Width in columns
    width: usize,
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create an empty framebuffer (zero columns)
    pub fn new() -> Self {
        Self {
            rows: core::array::from_fn(|_| Vec::new()),
            width: 0,
        }
    }

    /// Create a blank framebuffer `width` columns wide
    ///
    /// Fails with [`RasterError::OutOfMemory`] when `width` exceeds
    /// [`MAX_FRAMEBUFFER_COLUMNS`].
    pub fn with_width(width: usize) -> Result<Self, RasterError> {
        if width > MAX_FRAMEBUFFER_COLUMNS {
            return Err(RasterError::OutOfMemory);
        }

        let blocks = width.div_ceil(MATRIX_WIDTH);
        let mut fb = Self::new();
        for row in &mut fb.rows {
            row.resize(blocks, 0)
                .map_err(|_| RasterError::OutOfMemory)?;
        }
        fb.width = width;
        Ok(fb)
    }

    /// Width in columns
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of 8-column matrix blocks backing the columns
    #[inline]
    pub fn blocks(&self) -> usize {
        self.rows[0].len()
    }

    /// Whether the framebuffer has no columns
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    /// Row byte of a matrix block
    ///
    /// Blocks past the end read as blank.
    #[inline]
    pub fn block(&self, block: usize, row: u8) -> u8 {
        self.rows
            .get(row as usize)
            .and_then(|plane| plane.get(block))
            .copied()
            .unwrap_or(0)
    }

    /// Whether the pixel at (`row`, `column`) is lit
    pub fn pixel(&self, row: u8, column: usize) -> bool {
        self.block(column / MATRIX_WIDTH, row) & (1 << (column % MATRIX_WIDTH)) != 0
    }

    /// Light the pixel at (`row`, `column`)
    ///
    /// Positions outside the framebuffer are ignored.
    pub fn set_pixel(&mut self, row: u8, column: usize) {
        if column >= self.width {
            return;
        }
        if let Some(byte) = self
            .rows
            .get_mut(row as usize)
            .and_then(|plane| plane.get_mut(column / MATRIX_WIDTH))
        {
            *byte |= 1 << (column % MATRIX_WIDTH);
        }
    }

    /// Move the whole image one column towards column 0
    ///
    /// Each row is shifted independently: every column takes the value of
    /// the column to its right, the last column becomes blank and column 0
    /// falls off. Not circular.
    pub fn shift_columns(&mut self) {
        for plane in &mut self.rows {
            let mut carry = 0u8;
            for byte in plane.iter_mut().rev() {
                let next_carry = *byte & 1;
                *byte = (*byte >> 1) | (carry << 7);
                carry = next_carry;
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Framebuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Framebuffer {{ width: {}, blocks: {} }}",
            self.width,
            self.blocks()
        );
    }
}
