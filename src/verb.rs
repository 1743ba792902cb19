//! Structs for verbs.
//!
//! Verbs inflect by infixation: a morpheme is spliced into a syllable
//! selected by position, immediately before that syllable's first vowel.
//!
//! # Examples
//!
//! ```
//! use navi_morph::verb::{Verb, Voice};
//!
//! let mut verb = Verb::try_new("taron", 0).unwrap();
//! assert_eq!(verb.participle(Voice::Active), "tusaron");
//! assert_eq!(verb.causative(), "teykaron");
//! assert_eq!(verb.last_derived_form(), Some("teykaron"));
//! ```
use crate::{
    phonology,
    term::{self, GrammaticalInfo, InvalidWordError, Term, WordType},
    util,
};
use std::borrow::Cow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transitivity {
    Transitive,
    Intransitive,
}

impl Transitivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transitivity::Transitive => "transitive",
            Transitivity::Intransitive => "intransitive",
        }
    }
}

/// The voice of a participle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Voice {
    Active,
    Passive,
}

/// A combination of infixes to apply in one pass, one per slot. The
/// pre-first slot targets the second-to-last syllable and is skipped
/// entirely on monosyllables; the first slot also targets the second-to-last
/// syllable; the second slot targets the last.
#[derive(Clone, Copy, Debug, Default)]
pub struct Infixes<'i> {
    pub pre_first: Option<&'i str>,
    pub first: Option<&'i str>,
    pub second: Option<&'i str>,
}

/// A single verb.
#[derive(Clone, Debug)]
pub struct Verb<'a> {
    text: &'a str,
    position: usize,
    normalized: Cow<'a, str>,
    transitivity: Transitivity,
    is_compound: bool,
    last_derived: Option<String>,
}

impl<'a> Verb<'a> {
    pub fn try_new(text: &'a str, position: usize) -> Result<Self, InvalidWordError> {
        Self::try_with_attrs(text, position, Transitivity::Transitive, false)
    }

    pub fn try_with_attrs(
        text: &'a str,
        position: usize,
        transitivity: Transitivity,
        is_compound: bool,
    ) -> Result<Self, InvalidWordError> {
        term::validate(text)?;
        Ok(Verb {
            text,
            position,
            normalized: util::normalize(text),
            transitivity,
            is_compound,
            last_derived: None,
        })
    }

    /// Applies the given infix combination to the verb, slot by slot, and
    /// records the result as the most recent derived form.
    pub fn apply_infixes(&mut self, infixes: Infixes<'_>) -> String {
        let mut result = self.text.to_string();
        let syllable_count = phonology::split_syllables(&result).len();

        if let Some(pre_first) = infixes.pre_first {
            if syllable_count >= 2 {
                result = insert_infix(&result, pre_first, -2);
            }
        }
        if let Some(first) = infixes.first {
            result = insert_infix(&result, first, -2);
        }
        if let Some(second) = infixes.second {
            result = insert_infix(&result, second, -1);
        }

        self.last_derived = Some(result.clone());
        result
    }

    /// Returns the participle: infix `us` (active) or `awn` (passive) in the
    /// first slot.
    pub fn participle(&mut self, voice: Voice) -> String {
        let infix = match voice {
            Voice::Active => "us",
            Voice::Passive => "awn",
        };
        self.apply_infixes(Infixes {
            first: Some(infix),
            ..Infixes::default()
        })
    }

    /// Returns the causative: infix `eyk` in the pre-first slot.
    pub fn causative(&mut self) -> String {
        self.apply_infixes(Infixes {
            pre_first: Some("eyk"),
            ..Infixes::default()
        })
    }

    /// Returns the reflexive: infix `äp` in the pre-first slot.
    pub fn reflexive(&mut self) -> String {
        self.apply_infixes(Infixes {
            pre_first: Some("äp"),
            ..Infixes::default()
        })
    }

    /// The most recently derived surface form, if any derivation has run.
    pub fn last_derived_form(&self) -> Option<&str> {
        self.last_derived.as_deref()
    }

    pub fn transitivity(&self) -> Transitivity {
        self.transitivity
    }

    pub fn is_transitive(&self) -> bool {
        self.transitivity == Transitivity::Transitive
    }

    pub fn is_compound(&self) -> bool {
        self.is_compound
    }
}

// Splices an infix into the syllable at the given signed index (negative
// counts from the end), immediately before the syllable's first vowel. An
// index beyond the syllable count clamps to the nearest end; a vowel-less
// target syllable leaves the word unchanged.
fn insert_infix(word: &str, infix: &str, index: isize) -> String {
    let syllables = phonology::split_syllables(word);
    let index = if index.unsigned_abs() > syllables.len() {
        if index < 0 {
            -1
        } else {
            0
        }
    } else {
        index
    };
    let target = if index < 0 {
        (syllables.len() as isize + index) as usize
    } else {
        index as usize
    };

    let mut result = String::with_capacity(word.len() + infix.len());
    for (i, syllable) in syllables.iter().enumerate() {
        if i == target {
            match syllable
                .char_indices()
                .find(|(_, c)| phonology::is_vowel(*c))
            {
                Some((at, _)) => {
                    result.push_str(&syllable[..at]);
                    result.push_str(infix);
                    result.push_str(&syllable[at..]);
                }
                None => result.push_str(syllable),
            }
        } else {
            result.push_str(syllable);
        }
    }
    result
}

impl<'a> Term<'a> for Verb<'a> {
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
        WordType::Verb
    }

    fn grammatical_info(&self) -> GrammaticalInfo {
        let mut info = term::base_info(self);
        info.insert("transitivity", self.transitivity.as_str().into());
        info.insert("is_transitive", self.is_transitive().into());
        info.insert("is_compound", self.is_compound.into());
        if let Some(derived) = &self.last_derived {
            info.insert("derived_form", derived.clone().into());
        }
        info
    }
}
