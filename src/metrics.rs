//! Advance widths for the standard Helvetica family, from the Adobe core
//! AFM files. The standard 14 fonts are never embedded, so the widths
//! live here; they are needed to right-align text inside a label cell.

use crate::surface::FontStyle;
use crate::units::Pt;

/// Widths are expressed in 1/1000 of the font size.
const GLYPH_SCALE: f32 = 1000.0;

/// Cap height of the Helvetica faces, as a fraction of the font size.
/// Used to vertically centre a line of text inside its cell.
pub(crate) const CAP_HEIGHT: f32 = 0.718;

/// Fallback advance for characters outside the ASCII table. Accented
/// Latin letters share the width of their base letter in Helvetica, and
/// the most common base letters are 556 wide.
const DEFAULT_WIDTH: u16 = 556;

#[rustfmt::skip]
const WIDTHS_REGULAR: [u16; 95] = [
    // 0x20 ' ' .. 0x2F '/'
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0x30 '0' .. 0x39 '9'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // 0x3A ':' .. 0x40 '@'
    278, 278, 584, 584, 584, 556, 1015,
    // 0x41 'A' .. 0x5A 'Z'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // 0x5B '[' .. 0x60 '`'
    278, 278, 278, 469, 556, 333,
    // 0x61 'a' .. 0x7A 'z'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // 0x7B '{' .. 0x7E '~'
    334, 260, 334, 584,
];

#[rustfmt::skip]
const WIDTHS_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Advance width of one character, in 1/1000 of the font size. The
/// oblique face shares the regular face's widths.
pub(crate) fn char_width(style: FontStyle, ch: char) -> u16 {
    let table = match style {
        FontStyle::Bold => &WIDTHS_BOLD,
        FontStyle::Regular | FontStyle::Italic => &WIDTHS_REGULAR,
    };
    let code = ch as u32;
    if (0x20..=0x7E).contains(&code) {
        table[(code - 0x20) as usize]
    } else {
        DEFAULT_WIDTH
    }
}

/// Width of a whole string at the given size, in points
pub(crate) fn text_width(text: &str, style: FontStyle, size: f32) -> Pt {
    text.chars()
        .map(|ch| Pt(char_width(style, ch) as f32 / GLYPH_SCALE * size))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_width_matches_afm() {
        let w = text_width(" ", FontStyle::Regular, 12.0);
        assert!((w.0 - 3.336).abs() < 0.001);
    }

    #[test]
    fn bold_is_wider_than_regular() {
        let regular = text_width("A", FontStyle::Regular, 12.0);
        let bold = text_width("A", FontStyle::Bold, 12.0);
        assert!(bold > regular);
    }

    #[test]
    fn oblique_shares_regular_widths() {
        assert_eq!(
            text_width("France", FontStyle::Regular, 9.0),
            text_width("France", FontStyle::Italic, 9.0)
        );
    }

    #[test]
    fn accented_characters_fall_back_to_a_sane_width() {
        assert_eq!(char_width(FontStyle::Regular, 'é'), 556);
    }
}
