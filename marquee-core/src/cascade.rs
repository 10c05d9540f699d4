//! Cascade addressing
//!
//! Maps logical positions onto (chip, register) pairs in a daisy chain of
//! 8x8 driver chips.
//!
//! Data shifted into the chain first ends up farthest from the controller,
//! so chip slot 0 of a transmitted frame is the *last* chip on the wire.
//! Text rendering puts matrix block 0 (the left edge of the text) on the
//! last slot, `cascade_size - 1`, and counts down from there.

use crate::font;

/// Columns (and rows) per matrix block
pub const MATRIX_WIDTH: usize = 8;

/// Longest supported chain of chips
pub const MAX_CASCADE_SIZE: u8 = 8;

/// Register address of digit/row 0
pub const DIGIT_0: u8 = 0x01;

/// Destination of a register write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Target {
    /// One chip, by slot index in the transmitted frame
    Chip(u8),
    /// Every chip in the cascade
    Broadcast,
}

/// A resolved register location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Location {
    /// Chip slot index
    pub chip: u8,
    /// Register address on that chip (1..=8)
    pub register: u8,
}

impl Location {
    /// Write target for this location
    pub fn target(&self) -> Target {
        Target::Chip(self.chip)
    }
}

/// Locate a text row inside a matrix block
///
/// `matrix` is the block index counted from the left edge of the
/// rendered text, `row` the pixel row (0 = top). The row register is
/// inverted: row 0 goes to register 8, row 7 to register 1.
///
/// Returns `None` when the block or row falls outside the cascade.
pub fn locate_matrix(matrix: usize, row: u8, cascade_size: u8) -> Option<Location> {
    if matrix >= cascade_size as usize || row as usize >= MATRIX_WIDTH {
        return None;
    }

    Some(Location {
        chip: cascade_size - matrix as u8 - 1,
        register: MATRIX_WIDTH as u8 - row,
    })
}

/// Locate a digit on the digit (row-register) path
///
/// Digits are numbered 0..`digits_total` across the cascade, 8 per chip.
/// A mirrored cascade numbers them from the other end.
///
/// Returns `None` for `digit >= digits_total`.
pub fn locate_digit(digit: u8, digits_total: u8, mirrored: bool) -> Option<Location> {
    if digit >= digits_total {
        return None;
    }

    let digit = if mirrored {
        digits_total - digit - 1
    } else {
        digit
    };

    Some(Location {
        chip: digit / MATRIX_WIDTH as u8,
        register: DIGIT_0 + digit % MATRIX_WIDTH as u8,
    })
}

/// Number of matrix blocks to transmit for `text`
///
/// One block per printable character of `text`, capped at the cascade
/// length. Characters without a glyph are never displayed and add no
/// block. The count is in characters while blocks are 8 columns wide, so
/// narrow glyphs can leave rasterized columns untransmitted and wide text
/// can ask for blank blocks. Callers that know the block count they want
/// should pass it explicitly instead.
pub fn display_blocks(text: &str, cascade_size: u8) -> usize {
    text.chars()
        .filter_map(font::glyph_for)
        .count()
        .min(cascade_size as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_blocks_cap() {
        assert_eq!(display_blocks("", 4), 0);
        assert_eq!(display_blocks("AB", 4), 2);
        assert_eq!(display_blocks("HELLO", 4), 4);
        // Characters without a glyph add no block
        assert_eq!(display_blocks("A\x01", 4), 1);
        assert_eq!(display_blocks("A\x01B", 4), display_blocks("AB", 4));
        assert_eq!(display_blocks("\x01\u{e9}", 4), 0);
    }

    #[test]
    fn test_matrix_chip_reversal() {
        assert_eq!(locate_matrix(0, 0, 3).unwrap().chip, 2);
        assert_eq!(locate_matrix(1, 0, 3).unwrap().chip, 1);
        assert_eq!(locate_matrix(2, 0, 3).unwrap().chip, 0);

        // Single chip cascade
        assert_eq!(locate_matrix(0, 5, 1).unwrap().chip, 0);
    }

    #[test]
    fn test_matrix_row_register_inversion() {
        assert_eq!(locate_matrix(0, 0, 3).unwrap().register, 8);
        assert_eq!(locate_matrix(0, 1, 3).unwrap().register, 7);
        assert_eq!(locate_matrix(0, 6, 3).unwrap().register, 2);
        assert_eq!(locate_matrix(0, 7, 3).unwrap().register, 1);

        // Independent of the block
        assert_eq!(locate_matrix(2, 0, 3).unwrap().register, 8);
        assert_eq!(locate_matrix(2, 7, 3).unwrap().register, 1);
    }

    #[test]
    fn test_matrix_out_of_cascade() {
        assert!(locate_matrix(3, 0, 3).is_none());
        assert!(locate_matrix(0, 8, 3).is_none());
        assert!(locate_matrix(0, 0, 0).is_none());
    }

    #[test]
    fn test_digit_split() {
        assert_eq!(
            locate_digit(0, 16, false),
            Some(Location {
                chip: 0,
                register: 1
            })
        );
        assert_eq!(
            locate_digit(7, 16, false),
            Some(Location {
                chip: 0,
                register: 8
            })
        );
        assert_eq!(
            locate_digit(8, 16, false),
            Some(Location {
                chip: 1,
                register: 1
            })
        );
        assert_eq!(
            locate_digit(13, 16, false),
            Some(Location {
                chip: 1,
                register: 6
            })
        );
    }

    #[test]
    fn test_digit_mirrored() {
        // 16 digits: digit 0 becomes 15 (chip 1, row 7)
        assert_eq!(
            locate_digit(0, 16, true),
            Some(Location {
                chip: 1,
                register: 8
            })
        );
        assert_eq!(
            locate_digit(15, 16, true),
            Some(Location {
                chip: 0,
                register: 1
            })
        );
        // Partial chip: 6 digits, digit 1 becomes 4
        assert_eq!(
            locate_digit(1, 6, true),
            Some(Location {
                chip: 0,
                register: 5
            })
        );
    }

    #[test]
    fn test_digit_out_of_range() {
        assert!(locate_digit(16, 16, false).is_none());
        assert!(locate_digit(16, 16, true).is_none());
        assert!(locate_digit(0, 0, false).is_none());
    }

    #[test]
    fn test_location_target() {
        let loc = locate_matrix(0, 0, 4).unwrap();
        assert_eq!(loc.target(), Target::Chip(3));
    }
}
