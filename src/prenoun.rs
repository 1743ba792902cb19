//! Structs for prenouns.
//!
//! A prenoun is a particle-like modifier that attaches to the front of a
//! noun, contracting at a vowel boundary.

use crate::{
    term::{self, GrammaticalInfo, InvalidWordError, Term, WordType},
    util,
};
use std::borrow::Cow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrenounType {
    Deictic,
    Relative,
    Interrogative,
    Negative,
    Demonstrative,
}

impl PrenounType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrenounType::Deictic => "deictic",
            PrenounType::Relative => "relative",
            PrenounType::Interrogative => "interrogative",
            PrenounType::Negative => "negative",
            PrenounType::Demonstrative => "demonstrative",
        }
    }
}

// Fused prenoun-noun combinations that do not follow the contraction rule.
const IRREGULAR_COMBINATIONS: &[(&str, &str, &str)] = &[("fì", "atan", "fìtan")];

// Prenouns built on these prefixes lenite the noun they attach to.
const LENITING_PRENOUNS: &[&str] = &["pe"];

/// A single prenoun.
#[derive(Clone, Debug)]
pub struct Prenoun<'a> {
    text: &'a str,
    position: usize,
    normalized: Cow<'a, str>,
    prenoun_type: PrenounType,
}

impl<'a> Prenoun<'a> {
    pub fn try_new(
        text: &'a str,
        position: usize,
        prenoun_type: PrenounType,
    ) -> Result<Self, InvalidWordError> {
        term::validate(text)?;
        Ok(Prenoun {
            text,
            position,
            normalized: util::normalize(text),
            prenoun_type,
        })
    }

    /// Attaches the prenoun to a noun. An `ì`-final prenoun contracts away
    /// its vowel before an `a`-initial noun; the irregular fused
    /// combinations are checked first.
    pub fn combined_with_noun(&self, noun: &str) -> String {
        for (prenoun, target, fused) in IRREGULAR_COMBINATIONS {
            if *prenoun == self.text && *target == noun {
                return (*fused).to_string();
            }
        }

        if self.text.ends_with('ì') && noun.starts_with('a') {
            let stem = &self.text[..self.text.len() - 'ì'.len_utf8()];
            return format!("{}{}", stem, noun);
        }
        format!("{}{}", self.text, noun)
    }

    /// True for the prenouns that lenite the noun they attach to.
    pub fn causes_lenition(&self) -> bool {
        LENITING_PRENOUNS.iter().any(|p| self.text.starts_with(p))
    }

    pub fn prenoun_type(&self) -> PrenounType {
        self.prenoun_type
    }
}

impl<'a> Term<'a> for Prenoun<'a> {
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
        WordType::Prenoun
    }

    fn grammatical_info(&self) -> GrammaticalInfo {
        let mut info = term::base_info(self);
        info.insert("prenoun_type", self.prenoun_type.as_str().into());
        info.insert("causes_lenition", self.causes_lenition().into());
        info
    }
}

#[cfg(test)]
mod tests {
    use super::{Prenoun, PrenounType};

    #[test]
    fn combined_with_noun() {
        let fi = Prenoun::try_new("fì", 0, PrenounType::Deictic).unwrap();
        // The fused irregular wins over the contraction rule.
        assert_eq!(fi.combined_with_noun("atan"), "fìtan");
        // Contraction: the final ì drops before an a-initial noun.
        assert_eq!(fi.combined_with_noun("ayla"), "fayla");
        // Plain concatenation otherwise.
        assert_eq!(fi.combined_with_noun("utral"), "fìutral");

        let tsa = Prenoun::try_new("tsa", 0, PrenounType::Deictic).unwrap();
        assert_eq!(tsa.combined_with_noun("utral"), "tsautral");
    }

    #[test]
    fn causes_lenition() {
        let pe = Prenoun::try_new("pe", 0, PrenounType::Interrogative).unwrap();
        assert!(pe.causes_lenition());

        let fra = Prenoun::try_new("fra", 0, PrenounType::Relative).unwrap();
        assert!(!fra.causes_lenition());
    }
}
