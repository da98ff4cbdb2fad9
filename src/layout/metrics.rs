//! Helvetica advance widths for centering label text
//!
//! PDF text is positioned by its left edge, so centered lines need their
//! width up front. The table holds the standard Helvetica AFM widths in
//! thousandths of an em for printable ASCII, index = `char as usize - 32`.

/// Width used for characters outside printable ASCII
pub const FALLBACK_WIDTH: u16 = 556;

const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Advance width of one character in thousandths of an em
pub fn char_width(c: char) -> u16 {
    (c as usize)
        .checked_sub(32)
        .and_then(|index| HELVETICA_WIDTHS.get(index))
        .copied()
        .unwrap_or(FALLBACK_WIDTH)
}

/// Width of `text` set in Helvetica at `font_size` points
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c))).sum();
    units as f32 * font_size / 1000.0
}
