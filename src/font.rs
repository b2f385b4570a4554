//! 5x8 ASCII font
//!
//! One glyph per printable ASCII character (`' '` through `'~'`). Each glyph
//! is five column bytes, left to right. Within a byte the most significant
//! bit is the top row, matching [`LedMatrix::draw_bytes`](crate::LedMatrix::draw_bytes)
//! with `horizontal = false`. The bottom row is left empty as line spacing.
//!
//! ```
//! use led_matrix::font::{glyph, GLYPH_HEIGHT};
//!
//! // 'T': a full-height stem in the middle column, topped by a bar
//! let t = glyph('T').unwrap_or(&[0; 5]);
//! assert_eq!(t[2], 0b1111_1110);
//! assert_eq!(t[0], 0b1000_0000);
//! assert_eq!(GLYPH_HEIGHT, 8);
//! ```

/// Columns per glyph
pub const GLYPH_WIDTH: usize = 5;

/// Rows per glyph (bits per column byte)
pub const GLYPH_HEIGHT: usize = 8;

/// First character in [`ASCII_5X8`]
pub const FIRST_CHAR: char = ' ';

/// Last character in [`ASCII_5X8`]
pub const LAST_CHAR: char = '~';

/// Glyph bitmaps for `' '..='~'`, indexed by `char as usize - 0x20`
pub static ASCII_5X8: [[u8; GLYPH_WIDTH]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0xFA, 0x00, 0x00], // '!'
    [0x00, 0xE0, 0x00, 0xE0, 0x00], // '"'
    [0x28, 0xFE, 0x28, 0xFE, 0x28], // '#'
    [0x24, 0x54, 0xFE, 0x54, 0x48], // '$'
    [0xC4, 0xC8, 0x10, 0x26, 0x46], // '%'
    [0x6C, 0x92, 0xAA, 0x44, 0x0A], // '&'
    [0x00, 0xA0, 0xC0, 0x00, 0x00], // '\''
    [0x00, 0x38, 0x44, 0x82, 0x00], // '('
    [0x00, 0x82, 0x44, 0x38, 0x00], // ')'
    [0x10, 0x54, 0x38, 0x54, 0x10], // '*'
    [0x10, 0x10, 0x7C, 0x10, 0x10], // '+'
    [0x00, 0x0A, 0x0C, 0x00, 0x00], // ','
    [0x10, 0x10, 0x10, 0x10, 0x10], // '-'
    [0x00, 0x06, 0x06, 0x00, 0x00], // '.'
    [0x04, 0x08, 0x10, 0x20, 0x40], // '/'
    [0x7C, 0x8A, 0x92, 0xA2, 0x7C], // '0'
    [0x00, 0x42, 0xFE, 0x02, 0x00], // '1'
    [0x42, 0x86, 0x8A, 0x92, 0x62], // '2'
    [0x84, 0x82, 0xA2, 0xD2, 0x8C], // '3'
    [0x18, 0x28, 0x48, 0xFE, 0x08], // '4'
    [0xE4, 0xA2, 0xA2, 0xA2, 0x9C], // '5'
    [0x3C, 0x52, 0x92, 0x92, 0x0C], // '6'
    [0x80, 0x8E, 0x90, 0xA0, 0xC0], // '7'
    [0x6C, 0x92, 0x92, 0x92, 0x6C], // '8'
    [0x60, 0x92, 0x92, 0x94, 0x78], // '9'
    [0x00, 0x6C, 0x6C, 0x00, 0x00], // ':'
    [0x00, 0x6A, 0x6C, 0x00, 0x00], // ';'
    [0x10, 0x28, 0x44, 0x82, 0x00], // '<'
    [0x28, 0x28, 0x28, 0x28, 0x28], // '='
    [0x00, 0x82, 0x44, 0x28, 0x10], // '>'
    [0x40, 0x80, 0x8A, 0x90, 0x60], // '?'
    [0x4C, 0x92, 0x9E, 0x82, 0x7C], // '@'
    [0x7E, 0x88, 0x88, 0x88, 0x7E], // 'A'
    [0xFE, 0x92, 0x92, 0x92, 0x6C], // 'B'
    [0x7C, 0x82, 0x82, 0x82, 0x44], // 'C'
    [0xFE, 0x82, 0x82, 0x44, 0x38], // 'D'
    [0xFE, 0x92, 0x92, 0x92, 0x82], // 'E'
    [0xFE, 0x90, 0x90, 0x90, 0x80], // 'F'
    [0x7C, 0x82, 0x92, 0x92, 0x5E], // 'G'
    [0xFE, 0x10, 0x10, 0x10, 0xFE], // 'H'
    [0x00, 0x82, 0xFE, 0x82, 0x00], // 'I'
    [0x04, 0x02, 0x82, 0xFC, 0x80], // 'J'
    [0xFE, 0x10, 0x28, 0x44, 0x82], // 'K'
    [0xFE, 0x02, 0x02, 0x02, 0x02], // 'L'
    [0xFE, 0x40, 0x30, 0x40, 0xFE], // 'M'
    [0xFE, 0x20, 0x10, 0x08, 0xFE], // 'N'
    [0x7C, 0x82, 0x82, 0x82, 0x7C], // 'O'
    [0xFE, 0x90, 0x90, 0x90, 0x60], // 'P'
    [0x7C, 0x82, 0x8A, 0x84, 0x7A], // 'Q'
    [0xFE, 0x90, 0x98, 0x94, 0x62], // 'R'
    [0x62, 0x92, 0x92, 0x92, 0x8C], // 'S'
    [0x80, 0x80, 0xFE, 0x80, 0x80], // 'T'
    [0xFC, 0x02, 0x02, 0x02, 0xFC], // 'U'
    [0xF8, 0x04, 0x02, 0x04, 0xF8], // 'V'
    [0xFC, 0x02, 0x1C, 0x02, 0xFC], // 'W'
    [0xC6, 0x28, 0x10, 0x28, 0xC6], // 'X'
    [0xE0, 0x10, 0x0E, 0x10, 0xE0], // 'Y'
    [0x86, 0x8A, 0x92, 0xA2, 0xC2], // 'Z'
    [0x00, 0xFE, 0x82, 0x82, 0x00], // '['
    [0x40, 0x20, 0x10, 0x08, 0x04], // '\\'
    [0x00, 0x82, 0x82, 0xFE, 0x00], // ']'
    [0x20, 0x40, 0x80, 0x40, 0x20], // '^'
    [0x02, 0x02, 0x02, 0x02, 0x02], // '_'
    [0x00, 0x80, 0x40, 0x20, 0x00], // '`'
    [0x04, 0x2A, 0x2A, 0x2A, 0x1E], // 'a'
    [0xFE, 0x12, 0x22, 0x22, 0x1C], // 'b'
    [0x1C, 0x22, 0x22, 0x22, 0x04], // 'c'
    [0x1C, 0x22, 0x22, 0x12, 0xFE], // 'd'
    [0x1C, 0x2A, 0x2A, 0x2A, 0x18], // 'e'
    [0x10, 0x7E, 0x90, 0x80, 0x40], // 'f'
    [0x30, 0x4A, 0x4A, 0x4A, 0x7C], // 'g'
    [0xFE, 0x10, 0x20, 0x20, 0x1E], // 'h'
    [0x00, 0x22, 0xBE, 0x02, 0x00], // 'i'
    [0x04, 0x02, 0x22, 0xBC, 0x00], // 'j'
    [0xFE, 0x08, 0x14, 0x22, 0x00], // 'k'
    [0x00, 0x82, 0xFE, 0x02, 0x00], // 'l'
    [0x3E, 0x20, 0x18, 0x20, 0x1E], // 'm'
    [0x3E, 0x10, 0x20, 0x20, 0x1E], // 'n'
    [0x1C, 0x22, 0x22, 0x22, 0x1C], // 'o'
    [0x3E, 0x28, 0x28, 0x28, 0x10], // 'p'
    [0x10, 0x28, 0x28, 0x18, 0x3E], // 'q'
    [0x3E, 0x10, 0x20, 0x20, 0x10], // 'r'
    [0x12, 0x2A, 0x2A, 0x2A, 0x04], // 's'
    [0x20, 0xFC, 0x22, 0x02, 0x04], // 't'
    [0x3C, 0x02, 0x02, 0x04, 0x3E], // 'u'
    [0x38, 0x04, 0x02, 0x04, 0x38], // 'v'
    [0x3C, 0x02, 0x0C, 0x02, 0x3C], // 'w'
    [0x22, 0x14, 0x08, 0x14, 0x22], // 'x'
    [0x30, 0x0A, 0x0A, 0x0A, 0x3C], // 'y'
    [0x22, 0x26, 0x2A, 0x32, 0x22], // 'z'
    [0x00, 0x10, 0x6C, 0x82, 0x00], // '{'
    [0x00, 0x00, 0xFE, 0x00, 0x00], // '|'
    [0x00, 0x82, 0x6C, 0x10, 0x00], // '}'
    [0x10, 0x20, 0x10, 0x08, 0x10], // '~'
];

/// Look up the glyph for a printable ASCII character
///
/// Returns `None` for control characters and anything outside ASCII.
pub fn glyph(c: char) -> Option<&'static [u8; GLYPH_WIDTH]> {
    if !(FIRST_CHAR..=LAST_CHAR).contains(&c) {
        return None;
    }
    ASCII_5X8.get(c as usize - FIRST_CHAR as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_is_blank() {
        assert_eq!(glyph(' '), Some(&[0u8; 5]));
    }

    #[test]
    fn test_table_covers_printable_ascii() {
        assert_eq!(ASCII_5X8.len(), LAST_CHAR as usize - FIRST_CHAR as usize + 1);
        assert!(glyph('~').is_some());
        assert!(glyph('A').is_some());
    }

    #[test]
    fn test_non_printable_has_no_glyph() {
        assert_eq!(glyph('\n'), None);
        assert_eq!(glyph('\u{7f}'), None);
        assert_eq!(glyph('é'), None);
    }

    #[test]
    fn test_bottom_row_is_spacing() {
        for columns in &ASCII_5X8 {
            for column in columns {
                assert_eq!(column & 0x01, 0);
            }
        }
    }

    #[test]
    fn test_exclamation_mark() {
        // Middle column: five lit rows, a gap, then the dot
        assert_eq!(glyph('!'), Some(&[0x00, 0x00, 0b1111_1010, 0x00, 0x00]));
    }
}
