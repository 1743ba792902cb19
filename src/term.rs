//! Provides the [Term] trait, which defines methods shared by all word
//! structs, and the grammatical-info snapshot they all produce.

use crate::util;
use std::{collections::BTreeMap, fmt};
use thiserror::Error;

/// The error returned when a word is constructed from empty text or from
/// text containing characters outside the orthographic alphabet.
#[derive(Debug, Error, PartialEq)]
#[error("{0:?} is not a valid word")]
pub struct InvalidWordError(String);

pub(crate) fn validate(text: &str) -> Result<(), InvalidWordError> {
    if text.is_empty() || !util::is_orthographic(text) {
        return Err(InvalidWordError(text.to_string()));
    }
    Ok(())
}

/// The discriminant tag identifying a word's grammatical category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordType {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Numeral,
    Particle,
    Prenoun,
}

impl WordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WordType::Noun => "noun",
            WordType::Pronoun => "pronoun",
            WordType::Verb => "verb",
            WordType::Adjective => "adjective",
            WordType::Numeral => "numeral",
            WordType::Particle => "particle",
            WordType::Prenoun => "prenoun",
        }
    }
}

/// A single attribute value in a [GrammaticalInfo] snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(usize),
    Flag(bool),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => s.fmt(f),
            AttrValue::Number(n) => n.fmt(f),
            AttrValue::Flag(b) => b.fmt(f),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<usize> for AttrValue {
    fn from(n: usize) -> Self {
        AttrValue::Number(n)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Flag(b)
    }
}

/// A snapshot of a word's grammatical attributes, keyed by attribute name.
pub type GrammaticalInfo = BTreeMap<&'static str, AttrValue>;

/// This trait is implemented by all words, such as nouns, verbs, etc.
pub trait Term<'a> {
    /// The surface text the word was constructed from.
    fn text(&self) -> &'a str;

    /// The word's index in the source token sequence.
    fn position(&self) -> usize;

    /// The lower-cased form of the text.
    fn normalized(&self) -> &str;

    fn word_type(&self) -> WordType;

    /// Returns a snapshot of the word's grammatical attributes. Word structs
    /// extend the base snapshot with their own attributes.
    fn grammatical_info(&self) -> GrammaticalInfo {
        base_info(self)
    }
}

pub(crate) fn base_info<'a, T: Term<'a> + ?Sized>(term: &T) -> GrammaticalInfo {
    let mut info = GrammaticalInfo::new();
    info.insert("text", term.text().into());
    info.insert("position", term.position().into());
    info.insert("word_type", term.word_type().as_str().into());
    info.insert("normalized", term.normalized().to_string().into());
    info
}

#[cfg(test)]
mod tests {
    #[test]
    fn validate() {
        assert!(super::validate("utral").is_ok());
        assert!(super::validate("za'u").is_ok());
        assert!(super::validate("").is_err());
        assert!(super::validate("zz1").is_err());
        assert!(super::validate("t<ol>aron").is_err());
    }
}
