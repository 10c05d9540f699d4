//! 5x7 glyph data, one entry per code from 32 (space) to 127

use super::Glyph;

/// Glyphs for codes 32..=127, indexed by `code - 32`
pub static FONT_5X7: [Glyph; 96] = [
    // space
    Glyph::new(&[0x00]),
    // '!'
    Glyph::new(&[0x5F]),
    // '"'
    Glyph::new(&[0x07, 0x00, 0x07]),
    // '#'
    Glyph::new(&[0x14, 0x7F, 0x14, 0x7F, 0x14]),
    // '$'
    Glyph::new(&[0x24, 0x2A, 0x7F, 0x2A, 0x12]),
    // '%'
    Glyph::new(&[0x23, 0x13, 0x08, 0x64, 0x62]),
    // '&'
    Glyph::new(&[0x36, 0x49, 0x55, 0x22, 0x50]),
    // '''
    Glyph::new(&[0x05, 0x03]),
    // '('
    Glyph::new(&[0x1C, 0x22, 0x41]),
    // ')'
    Glyph::new(&[0x41, 0x22, 0x1C]),
    // '*'
    Glyph::new(&[0x14, 0x08, 0x3E, 0x08, 0x14]),
    // '+'
    Glyph::new(&[0x08, 0x08, 0x3E, 0x08, 0x08]),
    // ','
    Glyph::new(&[0x50, 0x30]),
    // '-'
    Glyph::new(&[0x08, 0x08, 0x08, 0x08, 0x08]),
    // '.'
    Glyph::new(&[0x60, 0x60]),
    // '/'
    Glyph::new(&[0x20, 0x10, 0x08, 0x04, 0x02]),
    // '0'
    Glyph::new(&[0x3E, 0x51, 0x49, 0x45, 0x3E]),
    // '1'
    Glyph::new(&[0x42, 0x7F, 0x40]),
    // '2'
    Glyph::new(&[0x42, 0x61, 0x51, 0x49, 0x46]),
    // '3'
    Glyph::new(&[0x21, 0x41, 0x45, 0x4B, 0x31]),
    // '4'
    Glyph::new(&[0x18, 0x14, 0x12, 0x7F, 0x10]),
    // '5'
    Glyph::new(&[0x27, 0x45, 0x45, 0x45, 0x39]),
    // '6'
    Glyph::new(&[0x3C, 0x4A, 0x49, 0x49, 0x30]),
    // '7'
    Glyph::new(&[0x01, 0x71, 0x09, 0x05, 0x03]),
    // '8'
    Glyph::new(&[0x36, 0x49, 0x49, 0x49, 0x36]),
    // '9'
    Glyph::new(&[0x06, 0x49, 0x49, 0x29, 0x1E]),
    // ':'
    Glyph::new(&[0x36, 0x36]),
    // ';'
    Glyph::new(&[0x56, 0x36]),
    // '<'
    Glyph::new(&[0x08, 0x14, 0x22, 0x41]),
    // '='
    Glyph::new(&[0x14, 0x14, 0x14, 0x14, 0x14]),
    // '>'
    Glyph::new(&[0x41, 0x22, 0x14, 0x08]),
    // '?'
    Glyph::new(&[0x02, 0x01, 0x51, 0x09, 0x06]),
    // '@'
    Glyph::new(&[0x3E, 0x41, 0x5D, 0x59, 0x4E]),
    // 'A'
    Glyph::new(&[0x7E, 0x11, 0x11, 0x11, 0x7E]),
    // 'B'
    Glyph::new(&[0x7F, 0x49, 0x49, 0x49, 0x36]),
    // 'C'
    Glyph::new(&[0x3E, 0x41, 0x41, 0x41, 0x22]),
    // 'D'
    Glyph::new(&[0x7F, 0x41, 0x41, 0x22, 0x1C]),
    // 'E'
    Glyph::new(&[0x7F, 0x49, 0x49, 0x49, 0x41]),
    // 'F'
    Glyph::new(&[0x7F, 0x09, 0x09, 0x09, 0x01]),
    // 'G'
    Glyph::new(&[0x3E, 0x41, 0x49, 0x49, 0x7A]),
    // 'H'
    Glyph::new(&[0x7F, 0x08, 0x08, 0x08, 0x7F]),
    // 'I'
    Glyph::new(&[0x41, 0x7F, 0x41]),
    // 'J'
    Glyph::new(&[0x20, 0x40, 0x41, 0x3F, 0x01]),
    // 'K'
    Glyph::new(&[0x7F, 0x08, 0x14, 0x22, 0x41]),
    // 'L'
    Glyph::new(&[0x7F, 0x40, 0x40, 0x40, 0x40]),
    // 'M'
    Glyph::new(&[0x7F, 0x02, 0x04, 0x02, 0x7F]),
    // 'N'
    Glyph::new(&[0x7F, 0x04, 0x08, 0x10, 0x7F]),
    // 'O'
    Glyph::new(&[0x3E, 0x41, 0x41, 0x41, 0x3E]),
    // 'P'
    Glyph::new(&[0x7F, 0x09, 0x09, 0x09, 0x06]),
    // 'Q'
    Glyph::new(&[0x3E, 0x41, 0x51, 0x21, 0x5E]),
    // 'R'
    Glyph::new(&[0x7F, 0x09, 0x19, 0x29, 0x46]),
    // 'S'
    Glyph::new(&[0x46, 0x49, 0x49, 0x49, 0x31]),
    // 'T'
    Glyph::new(&[0x01, 0x01, 0x7F, 0x01, 0x01]),
    // 'U'
    Glyph::new(&[0x3F, 0x40, 0x40, 0x40, 0x3F]),
    // 'V'
    Glyph::new(&[0x1F, 0x20, 0x40, 0x20, 0x1F]),
    // 'W'
    Glyph::new(&[0x7F, 0x20, 0x10, 0x20, 0x7F]),
    // 'X'
    Glyph::new(&[0x63, 0x14, 0x08, 0x14, 0x63]),
    // 'Y'
    Glyph::new(&[0x07, 0x08, 0x70, 0x08, 0x07]),
    // 'Z'
    Glyph::new(&[0x61, 0x51, 0x49, 0x45, 0x43]),
    // '['
    Glyph::new(&[0x7F, 0x41, 0x41]),
    // '\'
    Glyph::new(&[0x02, 0x04, 0x08, 0x10, 0x20]),
    // ']'
    Glyph::new(&[0x41, 0x41, 0x7F]),
    // '^'
    Glyph::new(&[0x04, 0x02, 0x01, 0x02, 0x04]),
    // '_'
    Glyph::new(&[0x40, 0x40, 0x40, 0x40, 0x40]),
    // '`'
    Glyph::new(&[0x01, 0x02, 0x04]),
    // 'a'
    Glyph::new(&[0x20, 0x54, 0x54, 0x54, 0x78]),
    // 'b'
    Glyph::new(&[0x7F, 0x48, 0x44, 0x44, 0x38]),
    // 'c'
    Glyph::new(&[0x38, 0x44, 0x44, 0x44, 0x20]),
    // 'd'
    Glyph::new(&[0x38, 0x44, 0x44, 0x48, 0x7F]),
    // 'e'
    Glyph::new(&[0x38, 0x54, 0x54, 0x54, 0x18]),
    // 'f'
    Glyph::new(&[0x08, 0x7E, 0x09, 0x01, 0x02]),
    // 'g'
    Glyph::new(&[0x0C, 0x52, 0x52, 0x52, 0x3E]),
    // 'h'
    Glyph::new(&[0x7F, 0x08, 0x04, 0x04, 0x78]),
    // 'i'
    Glyph::new(&[0x44, 0x7D, 0x40]),
    // 'j'
    Glyph::new(&[0x20, 0x40, 0x44, 0x3D]),
    // 'k'
    Glyph::new(&[0x7F, 0x10, 0x28, 0x44]),
    // 'l'
    Glyph::new(&[0x41, 0x7F, 0x40]),
    // 'm'
    Glyph::new(&[0x7C, 0x04, 0x18, 0x04, 0x78]),
    // 'n'
    Glyph::new(&[0x7C, 0x08, 0x04, 0x04, 0x78]),
    // 'o'
    Glyph::new(&[0x38, 0x44, 0x44, 0x44, 0x38]),
    // 'p'
    Glyph::new(&[0x7C, 0x14, 0x14, 0x14, 0x08]),
    // 'q'
    Glyph::new(&[0x08, 0x14, 0x14, 0x18, 0x7C]),
    // 'r'
    Glyph::new(&[0x7C, 0x08, 0x04, 0x04, 0x08]),
    // 's'
    Glyph::new(&[0x48, 0x54, 0x54, 0x54, 0x20]),
    // 't'
    Glyph::new(&[0x04, 0x3F, 0x44, 0x40, 0x20]),
    // 'u'
    Glyph::new(&[0x3C, 0x40, 0x40, 0x20, 0x7C]),
    // 'v'
    Glyph::new(&[0x1C, 0x20, 0x40, 0x20, 0x1C]),
    // 'w'
    Glyph::new(&[0x3C, 0x40, 0x30, 0x40, 0x3C]),
    // 'x'
    Glyph::new(&[0x44, 0x28, 0x10, 0x28, 0x44]),
    // 'y'
    Glyph::new(&[0x0C, 0x50, 0x50, 0x50, 0x3C]),
    // 'z'
    Glyph::new(&[0x44, 0x64, 0x54, 0x4C, 0x44]),
    // '{'
    Glyph::new(&[0x08, 0x36, 0x41]),
    // '|'
    Glyph::new(&[0x00, 0x7F, 0x00]),
    // '}'
    Glyph::new(&[0x41, 0x36, 0x08]),
    // '~' (drawn as a right arrow)
    Glyph::new(&[0x08, 0x08, 0x2A, 0x1C, 0x08]),
    // DEL, blank
    Glyph::new(&[0x00]),
];
