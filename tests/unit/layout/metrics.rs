//! Tests for Helvetica character widths

#[cfg(test)]
mod tests {
    use labelgrid::layout::metrics::{FALLBACK_WIDTH, char_width, text_width};

    // Tests known AFM widths at table boundaries
    // Verified by shifting the table index by one
    #[test]
    fn test_char_width_table() {
        assert_eq!(char_width(' '), 278);
        assert_eq!(char_width('0'), 556);
        assert_eq!(char_width('@'), 1015);
        assert_eq!(char_width('A'), 667);
        assert_eq!(char_width('W'), 944);
        assert_eq!(char_width('i'), 222);
        assert_eq!(char_width('m'), 833);
        assert_eq!(char_width('~'), 584);
    }

    // Tests characters outside printable ASCII use the fallback
    // Verified by returning zero for unknown characters
    #[test]
    fn test_char_width_fallback() {
        assert_eq!(char_width('\t'), FALLBACK_WIDTH);
        assert_eq!(char_width('é'), FALLBACK_WIDTH);
        assert_eq!(char_width('\u{7f}'), FALLBACK_WIDTH);
    }

    // Tests text width scales with font size
    // Verified by dividing by 100 instead of 1000
    #[test]
    fn test_text_width() {
        // G=778 P=667 0=556 1=556
        let width = text_width("GP01", 10.0);
        assert!((width - 25.57).abs() < 1e-3);

        let doubled = text_width("GP01", 20.0);
        assert!((doubled - 2.0 * width).abs() < 1e-3);

        assert!(text_width("", 8.0).abs() < f32::EPSILON);
    }
}
