//! Shared grammatical categories used across word types.

use std::str::FromStr;
use thiserror::Error;

/// The error returned when a case is requested by a name outside the six
/// recognized case tags.
#[derive(Debug, Error, PartialEq)]
#[error("{0} is not a recognized case")]
pub struct UnknownCaseError(String);

/// The six noun/pronoun cases, realized as suffixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Case {
    /// The bare, unsuffixed form.
    Subjective,
    Agentive,
    Patientive,
    Dative,
    Genitive,
    Topical,
}

impl Case {
    pub fn as_str(&self) -> &'static str {
        match self {
            Case::Subjective => "subjective",
            Case::Agentive => "agentive",
            Case::Patientive => "patientive",
            Case::Dative => "dative",
            Case::Genitive => "genitive",
            Case::Topical => "topical",
        }
    }
}

impl FromStr for Case {
    type Err = UnknownCaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subjective" => Ok(Case::Subjective),
            "agentive" => Ok(Case::Agentive),
            "patientive" => Ok(Case::Patientive),
            "dative" => Ok(Case::Dative),
            "genitive" => Ok(Case::Genitive),
            "topical" => Ok(Case::Topical),
            _ => Err(UnknownCaseError(s.to_string())),
        }
    }
}

/// Grammatical number. The language distinguishes dual and trial in addition
/// to the usual singular and plural.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Number {
    Singular,
    Dual,
    Trial,
    Plural,
}

impl Number {
    /// The number prefix. Singular is unmarked; the other prefixes trigger
    /// lenition of the stem they attach to.
    pub fn prefix(&self) -> &'static str {
        match self {
            Number::Singular => "",
            Number::Dual => "me",
            Number::Trial => "pxe",
            Number::Plural => "ay",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Number::Singular => "singular",
            Number::Dual => "dual",
            Number::Trial => "trial",
            Number::Plural => "plural",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Neutral,
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Neutral => "neutral",
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    pub fn as_str(&self) -> &'static str {
        match self {
            Person::First => "first",
            Person::Second => "second",
            Person::Third => "third",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Animacy {
    Animate,
    Inanimate,
}

impl Animacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Animacy::Animate => "animate",
            Animacy::Inanimate => "inanimate",
        }
    }
}

/// Whether a first-person dual/trial/plural pronoun includes the addressee.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inclusivity {
    Inclusive,
    Exclusive,
}

impl Inclusivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Inclusivity::Inclusive => "inclusive",
            Inclusivity::Exclusive => "exclusive",
        }
    }
}
