use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// The orthographic alphabet: Latin letters, the diacritic vowels the
// romanization uses, the tìftang (apostrophe), and the hyphen used in
// compounds.
static ORTHOGRAPHY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-ZàèìòùÀÈÌÒÙäëïöüÄËÏÖÜ'-]+$").expect("Could not parse orthography regex")
});

pub(crate) fn is_orthographic(word: &str) -> bool {
    ORTHOGRAPHY_REGEX.is_match(word)
}

pub(crate) fn is_lowercase(word: &str) -> bool {
    word.chars().all(|c| !c.is_uppercase())
}

/// Lower-cases a word, borrowing when it is already lowercase.
pub(crate) fn normalize(word: &str) -> Cow<'_, str> {
    if is_lowercase(word) {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(word.to_lowercase())
    }
}
