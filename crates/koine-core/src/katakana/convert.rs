use tracing::trace;
use unicode_normalization::UnicodeNormalization;

use super::{DiphthongBreathing, KatakanaTable};
use crate::normalize::{base_letter, has_rough_breathing, is_punctuation};
use crate::settings::settings;

/// Transcribe a Greek wordform into katakana using the configured
/// diphthong-breathing rule.
///
/// Never fails: characters no rule recognizes are copied through as-is.
pub fn to_katakana(word: &str) -> String {
    to_katakana_with(word, settings().katakana.diphthong_breathing)
}

pub fn to_katakana_with(word: &str, breathing: DiphthongBreathing) -> String {
    let table = KatakanaTable::global();
    let chars: Vec<char> = word.nfc().collect();
    let mut result = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if ch.is_whitespace() || is_punctuation(ch) {
            i += 1;
            continue;
        }

        let norm = base_letter(ch);
        let next = chars.get(i + 1).copied();
        let next_norm = next.map(base_letter);

        // γ before γ/κ/ξ/χ: the following consonant is read on the next step.
        if let Some(mora) = table.nasal(norm, next_norm) {
            result.push_str(mora);
            i += 1;
            continue;
        }

        if let (Some(next_ch), Some(next_norm)) = (next, next_norm) {
            let rough = match breathing {
                DiphthongBreathing::First => has_rough_breathing(ch),
                DiphthongBreathing::Either => {
                    has_rough_breathing(ch) || has_rough_breathing(next_ch)
                }
            };
            if let Some(kana) = table.diphthong(norm, next_norm, rough) {
                result.push_str(kana);
                i += 2;
                continue;
            }
            if let Some(kana) = table.syllable(norm, next_norm) {
                result.push_str(kana);
                i += 2;
                continue;
            }
        }

        if let Some(kana) = table.vowel(norm, has_rough_breathing(ch)) {
            result.push_str(kana);
        } else if let Some(kana) = table.consonant(norm) {
            result.push_str(kana);
        } else {
            trace!(ch = %ch, "no katakana rule, passing through");
            result.push(ch);
        }
        i += 1;
    }

    result
}

/// Characters of `word` that [`to_katakana`] would copy through unchanged.
pub fn unmapped_chars(word: &str) -> Vec<char> {
    let table = KatakanaTable::global();
    word.nfc()
        .filter(|&ch| !(ch.is_whitespace() || is_punctuation(ch)))
        .filter(|&ch| {
            let norm = base_letter(ch);
            table.vowel(norm, false).is_none() && table.consonant(norm).is_none()
        })
        .collect()
}
