use unicode_normalization::UnicodeNormalization;

/// Clean one extracted text run into a notation line.
///
/// Trims surrounding whitespace, removes non-breaking spaces (noobnotes.net
/// pads notation with U+00A0), and normalizes to NFC so accented characters
/// in song titles and note names have a single representation.
pub fn clean_line(input: &str) -> String {
    let stripped = input.trim().replace('\u{a0}', "");
    stripped.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(clean_line("  Am - C - G \n"), "Am - C - G");
    }

    #[test]
    fn test_removes_non_breaking_spaces() {
        assert_eq!(clean_line("C\u{a0}-\u{a0}D"), "C-D");
        assert_eq!(clean_line("\u{a0}\u{a0}"), "");
    }

    #[test]
    fn test_normalizes_nfc() {
        // e + combining acute accent -> é (precomposed)
        assert_eq!(clean_line("Entre\u{0301}e"), "Entr\u{e9}e");
    }

    #[test]
    fn test_whitespace_only_becomes_empty() {
        assert_eq!(clean_line("   "), "");
        assert_eq!(clean_line(""), "");
    }
}
