//! Phonological helpers shared by the word structs.
//!
//! This module provides the lenition rule table, the syllable segmenter used
//! for infix placement, and the diphthong test used when classifying nouns.
//!
//! # Examples
//!
//! ```
//! use navi_morph::phonology;
//!
//! assert_eq!(phonology::lenite("pxun"), "pun");
//! assert_eq!(phonology::split_syllables("taron"), vec!["ta", "ron"]);
//! ```
use std::borrow::Cow;

/// The vowels of the language, including the two diacritic vowels.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'ì', 'o', 'u', 'ä'];

const DIPHTHONGS: &[&str] = &["aw", "ew", "ay", "ey", "oy", "uy"];

// Ordering is precedence: the first rule whose prefix matches wins, so the
// aspirated stops must come before their plain counterparts. Note that the
// single-letter "t" rule matches every stem the final "ts" rule would, so
// "ts" never fires. The table is kept in this order on purpose; see
// DESIGN.md.
const LENITION_RULES: &[(&str, &str)] = &[
    ("px", "p"),
    ("tx", "t"),
    ("kx", "k"),
    ("p", "f"),
    ("t", "s"),
    ("k", "h"),
    ("ts", "s"),
];

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Applies lenition to a stem, replacing its initial consonant according to
/// the first matching rule. Stems that no rule applies to are returned
/// unchanged, without allocating.
pub fn lenite(stem: &str) -> Cow<'_, str> {
    for (from, to) in LENITION_RULES {
        if let Some(rest) = stem.strip_prefix(from) {
            return Cow::Owned(format!("{}{}", to, rest));
        }
    }
    Cow::Borrowed(stem)
}

/// Splits a word into syllables. A syllable closes immediately after each
/// vowel; a trailing consonant run with no vowel of its own joins the last
/// syllable, or stands alone if the word has no vowels at all.
pub fn split_syllables(word: &str) -> Vec<&str> {
    let mut bounds: Vec<(usize, usize)> = vec![];
    let mut start = 0;
    for (i, c) in word.char_indices() {
        if is_vowel(c) {
            let end = i + c.len_utf8();
            bounds.push((start, end));
            start = end;
        }
    }
    if start < word.len() {
        match bounds.last_mut() {
            Some(last) => last.1 = word.len(),
            None => bounds.push((0, word.len())),
        }
    }
    bounds.iter().map(|&(s, e)| &word[s..e]).collect()
}

/// Returns true if the word ends in one of the falling diphthongs.
pub fn ends_with_diphthong(word: &str) -> bool {
    DIPHTHONGS.iter().any(|d| word.ends_with(d))
}
