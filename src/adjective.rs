//! Structs for adjectives.
//!
//! # Examples
//!
//! ```
//! use navi_morph::adjective::{Adjective, Position};
//!
//! let mut adjective = Adjective::try_new("lor", 0).unwrap();
//! assert_eq!(adjective.attributive(Position::Before), "lora");
//! assert_eq!(adjective.adverb(), "nilor");
//! ```
use crate::{
    term::{self, GrammaticalInfo, InvalidWordError, Term, WordType},
    util,
};
use std::borrow::Cow;

/// Where an attributive adjective stands relative to its noun.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Before,
    After,
}

/// The kind of comparison to derive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    Standard,
    Superlative,
    Equality,
}

/// A single adjective.
#[derive(Clone, Debug)]
pub struct Adjective<'a> {
    text: &'a str,
    position: usize,
    normalized: Cow<'a, str>,
    derived_with_le: bool,
    is_color: bool,
    last_derived: Option<String>,
}

impl<'a> Adjective<'a> {
    pub fn try_new(text: &'a str, position: usize) -> Result<Self, InvalidWordError> {
        Self::try_with_attrs(text, position, false, false)
    }

    pub fn try_with_attrs(
        text: &'a str,
        position: usize,
        derived_with_le: bool,
        is_color: bool,
    ) -> Result<Self, InvalidWordError> {
        term::validate(text)?;
        Ok(Adjective {
            text,
            position,
            normalized: util::normalize(text),
            derived_with_le,
            is_color,
            last_derived: None,
        })
    }

    /// Returns the attributive form, marked with the linking suffix `a`.
    /// Adjectives derived with `le` are invariant after their noun, and a
    /// stem already ending in `a` takes no second marker.
    pub fn attributive(&mut self, position: Position) -> Cow<'a, str> {
        let form = if (self.derived_with_le && position == Position::After)
            || self.text.ends_with('a')
        {
            Cow::Borrowed(self.text)
        } else {
            Cow::Owned(format!("{}a", self.text))
        };
        self.last_derived = Some(form.to_string());
        form
    }

    /// Returns the derived adverb, prefixed with `ni`.
    pub fn adverb(&mut self) -> String {
        let form = format!("ni{}", self.text);
        self.last_derived = Some(form.clone());
        form
    }

    /// Returns the comparison phrase. The standard comparison is the marker
    /// plus its target; the superlative is invariant; the equality
    /// comparison wraps the adjective itself. An equality comparison with no
    /// target falls back to the bare text.
    pub fn comparative(&mut self, comparison: Comparison, compared_to: Option<&str>) -> String {
        let form = match comparison {
            Comparison::Standard => match compared_to {
                Some(target) => format!("to {}", target),
                None => "to".to_string(),
            },
            Comparison::Superlative => "frato".to_string(),
            Comparison::Equality => match compared_to {
                Some(target) => format!("niftxan {} na {}", self.text, target),
                None => self.text.to_string(),
            },
        };
        self.last_derived = Some(form.clone());
        form
    }

    /// Derives the color noun from a color adjective: `n`-final stems drop
    /// the `n` and take `mpin`, the rest take `pin`. Non-color adjectives
    /// come back unchanged.
    pub fn color_noun(&mut self) -> Cow<'a, str> {
        let form = if !self.is_color {
            Cow::Borrowed(self.text)
        } else {
            match self.text.strip_suffix('n') {
                Some(stem) => Cow::Owned(format!("{}mpin", stem)),
                None => Cow::Owned(format!("{}pin", self.text)),
            }
        };
        self.last_derived = Some(form.to_string());
        form
    }

    /// The most recently derived surface form, if any derivation has run.
    pub fn last_derived_form(&self) -> Option<&str> {
        self.last_derived.as_deref()
    }

    pub fn derived_with_le(&self) -> bool {
        self.derived_with_le
    }

    pub fn is_color(&self) -> bool {
        self.is_color
    }
}

impl<'a> Term<'a> for Adjective<'a> {
    fn text(&self) -> &'a str {
        self.text
    }

    fn position(&self) -> usize {
        self.position
    }

    fn normalized(&self) -> &str {
        &self.normalized
    }

    fn word_type(&self) -> WordType {
        WordType::Adjective
    }

    fn grammatical_info(&self) -> GrammaticalInfo {
        let mut info = term::base_info(self);
        info.insert("derived_with_le", self.derived_with_le.into());
        info.insert("is_color", self.is_color.into());
        if let Some(derived) = &self.last_derived {
            info.insert("derived_form", derived.clone().into());
        }
        info
    }
}

#[cfg(test)]
mod tests {
    use super::{Adjective, Comparison, Position};

    #[test]
    fn attributive() {
        let mut adjective = Adjective::try_new("lor", 0).unwrap();
        assert_eq!(adjective.attributive(Position::Before), "lora");
        assert_eq!(adjective.attributive(Position::After), "lora");

        // Already a-final: no second marker.
        let mut adjective = Adjective::try_new("tsawla", 0).unwrap();
        assert_eq!(adjective.attributive(Position::Before), "tsawla");

        // le-derived adjectives are invariant after the noun only.
        let mut adjective = Adjective::try_with_attrs("lefpom", 0, true, false).unwrap();
        assert_eq!(adjective.attributive(Position::After), "lefpom");
        assert_eq!(adjective.attributive(Position::Before), "lefpoma");
    }

    #[test]
    fn adverb() {
        let mut adjective = Adjective::try_new("ftue", 0).unwrap();
        assert_eq!(adjective.adverb(), "niftue");
    }

    #[test]
    fn comparative() {
        let mut adjective = Adjective::try_new("lor", 0).unwrap();
        assert_eq!(
            adjective.comparative(Comparison::Standard, Some("nga")),
            "to nga"
        );
        assert_eq!(adjective.comparative(Comparison::Standard, None), "to");
        assert_eq!(
            adjective.comparative(Comparison::Superlative, Some("nga")),
            "frato"
        );
        assert_eq!(
            adjective.comparative(Comparison::Equality, Some("nga")),
            "niftxan lor na nga"
        );
        assert_eq!(adjective.comparative(Comparison::Equality, None), "lor");
    }

    #[test]
    fn color_noun() {
        // An n-final color drops the n before mpin.
        let mut adjective = Adjective::try_with_attrs("ean", 0, false, true).unwrap();
        assert_eq!(adjective.color_noun(), "eampin");

        let mut adjective = Adjective::try_with_attrs("rim", 0, false, true).unwrap();
        assert_eq!(adjective.color_noun(), "rimpin");

        // Not a color: unchanged.
        let mut adjective = Adjective::try_new("lor", 0).unwrap();
        assert_eq!(adjective.color_noun(), "lor");
    }

    #[test]
    fn derived_form_cache() {
        let mut adjective = Adjective::try_new("lor", 0).unwrap();
        assert_eq!(adjective.last_derived_form(), None);

        adjective.adverb();
        assert_eq!(adjective.last_derived_form(), Some("nilor"));

        adjective.attributive(Position::Before);
        assert_eq!(adjective.last_derived_form(), Some("lora"));
    }
}
