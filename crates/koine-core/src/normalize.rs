//! Character-level normalization and classification for polytonic Greek.

use unicode_normalization::UnicodeNormalization;

/// Combining reversed comma above: the rough breathing (dasia).
const ROUGH_BREATHING: char = '\u{0314}';

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Reduce a glyph to its bare lowercase base letter.
///
/// Accents, breathings, diaeresis and iota subscript are dropped, so `ᾧ`,
/// `ὥ` and `Ω` all normalize to `ω`. The result is a lookup key only; it
/// must not be used to decide breathing-dependent sounds, since the
/// breathing is one of the marks removed here.
pub fn base_letter(c: char) -> char {
    let base = c.nfd().find(|&d| !is_combining_diacritic(d));
    match base {
        Some(b) => b.to_lowercase().next().unwrap_or(b),
        None => c,
    }
}

/// Whether the original (undecomposed) glyph carries a rough breathing.
pub fn has_rough_breathing(c: char) -> bool {
    c.nfd().any(|d| d == ROUGH_BREATHING)
}

/// Punctuation skipped by the phonetic engine.
///
/// Covers the ASCII marks used in the corpus plus the Greek ano teleia
/// (U+0387), the middle dot and the Greek question mark (U+037E).
pub fn is_punctuation(c: char) -> bool {
    matches!(c, '.' | ',' | ';' | ':' | '·' | '\u{0387}' | '\u{037E}')
}

/// Remove every character of `set` from `text`.
pub fn strip_chars(text: &str, set: &str) -> String {
    text.chars().filter(|c| !set.contains(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_letter_strips_diacritics() {
        assert_eq!(base_letter('ά'), 'α');
        assert_eq!(base_letter('ὰ'), 'α');
        assert_eq!(base_letter('ᾶ'), 'α');
        assert_eq!(base_letter('ἅ'), 'α');
        assert_eq!(base_letter('ᾳ'), 'α');
        assert_eq!(base_letter('ῇ'), 'η');
        assert_eq!(base_letter('ϊ'), 'ι');
    }

    #[test]
    fn test_base_letter_lowercases() {
        assert_eq!(base_letter('Ἐ'), 'ε');
        assert_eq!(base_letter('Ω'), 'ω');
        assert_eq!(base_letter('Σ'), 'σ');
    }

    #[test]
    fn test_base_letter_keeps_plain_letters() {
        assert_eq!(base_letter('λ'), 'λ');
        assert_eq!(base_letter('ς'), 'ς');
        assert_eq!(base_letter('x'), 'x');
    }

    #[test]
    fn test_lone_combining_mark_is_kept() {
        assert_eq!(base_letter('\u{0301}'), '\u{0301}');
    }

    #[test]
    fn test_rough_breathing() {
        assert!(has_rough_breathing('ὁ'));
        assert!(has_rough_breathing('ἅ'));
        assert!(has_rough_breathing('Ἱ'));
        assert!(has_rough_breathing('ῥ'));
        assert!(has_rough_breathing('ᾗ'));
        assert!(!has_rough_breathing('ὀ'));
        assert!(!has_rough_breathing('ό'));
        assert!(!has_rough_breathing('ο'));
    }

    #[test]
    fn test_punctuation() {
        assert!(is_punctuation(','));
        assert!(is_punctuation('\u{0387}'));
        assert!(is_punctuation('\u{037E}'));
        assert!(!is_punctuation('α'));
        assert!(!is_punctuation(' '));
    }

    #[test]
    fn test_strip_chars() {
        assert_eq!(strip_chars("λόγος,", ",."), "λόγος");
        assert_eq!(strip_chars("ἀρχῇ·", "·\u{0387}"), "ἀρχῇ");
    }
}
