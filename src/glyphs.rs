/*
 *  glyphs.rs
 * 
 *  WeatherStar - local on the 8s
 *	(c) 2020-26 Stuart Hunter
 *
 *	5x7 bitmap font covering printable ASCII, plus the degree mark
 *
 *	This program is free software: you can redistribute it and/or modify
 *	it under the terms of the GNU General Public License as published by
 *	the Free Software Foundation, either version 3 of the License, or
 *	(at your option) any later version.
 *
 *	This program is distributed in the hope that it will be useful,
 *	but WITHOUT ANY WARRANTY; without even the implied warranty of
 *	MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *	GNU General Public License for more details.
 *
 *	See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *	Public License.
 *
 */

/// Glyph cell is 5 columns by 7 rows; bit 4 of each row byte is the
/// leftmost column.
pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character, one blank column after the cell.
pub const GLYPH_ADVANCE: u32 = 6;

pub const FIRST_PRINTABLE: u8 = 32;
pub const LAST_PRINTABLE: u8 = 126;

/// Superscript degree mark, 3x3, bit 2 is the leftmost column.
pub const GLYPH_DEGREE: [u8; 3] = [0x02, 0x05, 0x02];
pub const DEGREE_SIZE: u32 = 3;

pub static FONT_5X7: [[u8; 7]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 32 ' '
    [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04], // 33 '!'
    [0x0a, 0x0a, 0x00, 0x00, 0x00, 0x00, 0x00], // 34 '"'
    [0x0a, 0x1f, 0x0a, 0x0a, 0x1f, 0x0a, 0x00], // 35 '#'
    [0x04, 0x0f, 0x14, 0x0e, 0x05, 0x1e, 0x04], // 36 '$'
    [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03], // 37 '%'
    [0x08, 0x14, 0x14, 0x08, 0x15, 0x12, 0x0d], // 38 '&'
    [0x04, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00], // 39 '''
    [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02], // 40 '('
    [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08], // 41 ')'
    [0x00, 0x04, 0x15, 0x0e, 0x15, 0x04, 0x00], // 42 '*'
    [0x00, 0x04, 0x04, 0x1f, 0x04, 0x04, 0x00], // 43 '+'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x08], // 44 ','
    [0x00, 0x00, 0x00, 0x1f, 0x00, 0x00, 0x00], // 45 '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04], // 46 '.'
    [0x01, 0x01, 0x02, 0x04, 0x08, 0x10, 0x10], // 47 '/'
    [0x0e, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0e], // 48 '0'
    [0x04, 0x0c, 0x04, 0x04, 0x04, 0x04, 0x0e], // 49 '1'
    [0x0e, 0x11, 0x01, 0x06, 0x08, 0x10, 0x1f], // 50 '2'
    [0x0e, 0x11, 0x01, 0x06, 0x01, 0x11, 0x0e], // 51 '3'
    [0x02, 0x06, 0x0a, 0x12, 0x1f, 0x02, 0x02], // 52 '4'
    [0x1f, 0x10, 0x1e, 0x01, 0x01, 0x11, 0x0e], // 53 '5'
    [0x06, 0x08, 0x10, 0x1e, 0x11, 0x11, 0x0e], // 54 '6'
    [0x1f, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 55 '7'
    [0x0e, 0x11, 0x11, 0x0e, 0x11, 0x11, 0x0e], // 56 '8'
    [0x0e, 0x11, 0x11, 0x0f, 0x01, 0x02, 0x0c], // 57 '9'
    [0x00, 0x00, 0x04, 0x00, 0x00, 0x04, 0x00], // 58 ':'
    [0x00, 0x00, 0x04, 0x00, 0x00, 0x04, 0x08], // 59 ';'
    [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02], // 60 '<'
    [0x00, 0x00, 0x1f, 0x00, 0x1f, 0x00, 0x00], // 61 '='
    [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08], // 62 '>'
    [0x0e, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04], // 63 '?'
    [0x0e, 0x11, 0x17, 0x15, 0x17, 0x10, 0x0e], // 64 '@'
    [0x0e, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11], // 65 'A'
    [0x1e, 0x11, 0x11, 0x1e, 0x11, 0x11, 0x1e], // 66 'B'
    [0x0e, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0e], // 67 'C'
    [0x1e, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1e], // 68 'D'
    [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x1f], // 69 'E'
    [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x10], // 70 'F'
    [0x0e, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0f], // 71 'G'
    [0x11, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11], // 72 'H'
    [0x0e, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0e], // 73 'I'
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0c], // 74 'J'
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // 75 'K'
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1f], // 76 'L'
    [0x11, 0x1b, 0x15, 0x15, 0x11, 0x11, 0x11], // 77 'M'
    [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11], // 78 'N'
    [0x0e, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e], // 79 'O'
    [0x1e, 0x11, 0x11, 0x1e, 0x10, 0x10, 0x10], // 80 'P'
    [0x0e, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0d], // 81 'Q'
    [0x1e, 0x11, 0x11, 0x1e, 0x14, 0x12, 0x11], // 82 'R'
    [0x0e, 0x11, 0x10, 0x0e, 0x01, 0x11, 0x0e], // 83 'S'
    [0x1f, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // 84 'T'
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e], // 85 'U'
    [0x11, 0x11, 0x11, 0x11, 0x0a, 0x0a, 0x04], // 86 'V'
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x1b, 0x11], // 87 'W'
    [0x11, 0x11, 0x0a, 0x04, 0x0a, 0x11, 0x11], // 88 'X'
    [0x11, 0x11, 0x0a, 0x04, 0x04, 0x04, 0x04], // 89 'Y'
    [0x1f, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1f], // 90 'Z'
    [0x0e, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0e], // 91 '['
    [0x10, 0x10, 0x08, 0x04, 0x02, 0x01, 0x01], // 92 '\'
    [0x0e, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0e], // 93 ']'
    [0x04, 0x0a, 0x11, 0x00, 0x00, 0x00, 0x00], // 94 '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1f], // 95 '_'
    [0x08, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00], // 96 '`'
    [0x00, 0x00, 0x0e, 0x01, 0x0f, 0x11, 0x0f], // 97 'a'
    [0x10, 0x10, 0x1e, 0x11, 0x11, 0x11, 0x1e], // 98 'b'
    [0x00, 0x00, 0x0e, 0x11, 0x10, 0x11, 0x0e], // 99 'c'
    [0x01, 0x01, 0x0f, 0x11, 0x11, 0x11, 0x0f], // 100 'd'
    [0x00, 0x00, 0x0e, 0x11, 0x1f, 0x10, 0x0e], // 101 'e'
    [0x06, 0x08, 0x1e, 0x08, 0x08, 0x08, 0x08], // 102 'f'
    [0x00, 0x00, 0x0f, 0x11, 0x0f, 0x01, 0x0e], // 103 'g'
    [0x10, 0x10, 0x1e, 0x11, 0x11, 0x11, 0x11], // 104 'h'
    [0x04, 0x00, 0x0c, 0x04, 0x04, 0x04, 0x0e], // 105 'i'
    [0x02, 0x00, 0x06, 0x02, 0x02, 0x12, 0x0c], // 106 'j'
    [0x10, 0x10, 0x12, 0x14, 0x18, 0x14, 0x12], // 107 'k'
    [0x0c, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0e], // 108 'l'
    [0x00, 0x00, 0x1a, 0x15, 0x15, 0x15, 0x15], // 109 'm'
    [0x00, 0x00, 0x1e, 0x11, 0x11, 0x11, 0x11], // 110 'n'
    [0x00, 0x00, 0x0e, 0x11, 0x11, 0x11, 0x0e], // 111 'o'
    [0x00, 0x00, 0x1e, 0x11, 0x1e, 0x10, 0x10], // 112 'p'
    [0x00, 0x00, 0x0f, 0x11, 0x0f, 0x01, 0x01], // 113 'q'
    [0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10], // 114 'r'
    [0x00, 0x00, 0x0f, 0x10, 0x0e, 0x01, 0x1e], // 115 's'
    [0x08, 0x08, 0x1e, 0x08, 0x08, 0x09, 0x06], // 116 't'
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x11, 0x0f], // 117 'u'
    [0x00, 0x00, 0x11, 0x11, 0x0a, 0x0a, 0x04], // 118 'v'
    [0x00, 0x00, 0x11, 0x11, 0x15, 0x15, 0x0a], // 119 'w'
    [0x00, 0x00, 0x11, 0x0a, 0x04, 0x0a, 0x11], // 120 'x'
    [0x00, 0x00, 0x11, 0x11, 0x0f, 0x01, 0x0e], // 121 'y'
    [0x00, 0x00, 0x1f, 0x02, 0x04, 0x08, 0x1f], // 122 'z'
    [0x02, 0x04, 0x04, 0x08, 0x04, 0x04, 0x02], // 123 '{'
    [0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // 124 '|'
    [0x08, 0x04, 0x04, 0x02, 0x04, 0x04, 0x08], // 125 '}'
    [0x00, 0x00, 0x08, 0x15, 0x02, 0x00, 0x00], // 126 '~'
];

/// Glyph rows for `ch`; anything outside 32..=126 renders as a space.
pub fn glyph(ch: char) -> &'static [u8; 7] {
    let code = ch as u32;
    let idx = if (FIRST_PRINTABLE as u32..=LAST_PRINTABLE as u32).contains(&code) {
        (code - FIRST_PRINTABLE as u32) as usize
    } else {
        0
    };
    &FONT_5X7[idx]
}

/// Whether column `col` of a 5-wide glyph row is set.
#[inline]
pub fn glyph_bit(row: u8, col: u32) -> bool {
    row & (0x10 >> col) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_printable_ascii() {
        assert_eq!(FONT_5X7.len(), (LAST_PRINTABLE - FIRST_PRINTABLE + 1) as usize);
    }

    #[test]
    fn test_space_is_blank() {
        assert!(glyph(' ').iter().all(|&r| r == 0));
    }

    #[test]
    fn test_unknown_falls_back_to_space() {
        assert_eq!(glyph('\u{7f}'), glyph(' '));
        assert_eq!(glyph('\u{b0}'), glyph(' '));
        assert_eq!(glyph('\n'), glyph(' '));
    }

    #[test]
    fn test_known_glyphs() {
        // 'A' top row is the apex .XXX.
        assert_eq!(glyph('A')[0], 0x0e);
        assert!(!glyph_bit(glyph('A')[0], 0));
        assert!(glyph_bit(glyph('A')[0], 1));
        // '~' is the last entry
        assert_eq!(glyph('~'), &FONT_5X7[94]);
    }
}
