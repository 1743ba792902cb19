//! The [Word] sum type over the seven grammatical categories.
//!
//! The classifier chain produces exactly one `Word` per token. The shared
//! [Term] surface is available on the enum itself; derivation methods
//! specific to a category are reached by matching on the variant.

use crate::{
    adjective::Adjective,
    noun::Noun,
    numeral::Numeral,
    particle::Particle,
    prenoun::Prenoun,
    pronoun::Pronoun,
    term::{GrammaticalInfo, Term, WordType},
    verb::Verb,
};

/// A classified word.
#[derive(Clone, Debug)]
pub enum Word<'a> {
    Noun(Noun<'a>),
    Pronoun(Pronoun<'a>),
    Verb(Verb<'a>),
    Adjective(Adjective<'a>),
    Numeral(Numeral<'a>),
    Particle(Particle<'a>),
    Prenoun(Prenoun<'a>),
}

macro_rules! delegate {
    ($self:ident, $word:ident => $body:expr) => {
        match $self {
            Word::Noun($word) => $body,
            Word::Pronoun($word) => $body,
            Word::Verb($word) => $body,
            Word::Adjective($word) => $body,
            Word::Numeral($word) => $body,
            Word::Particle($word) => $body,
            Word::Prenoun($word) => $body,
        }
    };
}

impl<'a> Term<'a> for Word<'a> {
    fn text(&self) -> &'a str {
        delegate!(self, word => word.text())
    }

    fn position(&self) -> usize {
        delegate!(self, word => word.position())
    }

    fn normalized(&self) -> &str {
        delegate!(self, word => word.normalized())
    }

    fn word_type(&self) -> WordType {
        delegate!(self, word => word.word_type())
    }

    fn grammatical_info(&self) -> GrammaticalInfo {
        delegate!(self, word => word.grammatical_info())
    }
}

impl<'a> From<Noun<'a>> for Word<'a> {
    fn from(noun: Noun<'a>) -> Self {
        Word::Noun(noun)
    }
}

impl<'a> From<Pronoun<'a>> for Word<'a> {
    fn from(pronoun: Pronoun<'a>) -> Self {
        Word::Pronoun(pronoun)
    }
}

impl<'a> From<Verb<'a>> for Word<'a> {
    fn from(verb: Verb<'a>) -> Self {
        Word::Verb(verb)
    }
}

impl<'a> From<Adjective<'a>> for Word<'a> {
    fn from(adjective: Adjective<'a>) -> Self {
        Word::Adjective(adjective)
    }
}

impl<'a> From<Numeral<'a>> for Word<'a> {
    fn from(numeral: Numeral<'a>) -> Self {
        Word::Numeral(numeral)
    }
}

impl<'a> From<Particle<'a>> for Word<'a> {
    fn from(particle: Particle<'a>) -> Self {
        Word::Particle(particle)
    }
}

impl<'a> From<Prenoun<'a>> for Word<'a> {
    fn from(prenoun: Prenoun<'a>) -> Self {
        Word::Prenoun(prenoun)
    }
}
