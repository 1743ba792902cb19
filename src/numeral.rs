//! Structs for numerals.
//!
//! The counting system is octal: there are dedicated literals for the values
//! one through eight, and the derived forms (ordinal, fraction, adverbial)
//! are built from them with a handful of irregular stems.
//!
//! # Examples
//!
//! ```
//! use navi_morph::numeral::Numeral;
//!
//! let numeral = Numeral::try_new("mune", 0, 2).unwrap();
//! assert_eq!(numeral.cardinal(), "mune");
//! assert_eq!(numeral.ordinal(), "muve");
//! assert_eq!(numeral.fraction(), "mawl");
//! assert_eq!(numeral.adverbial(), "melo");
//! ```
use crate::{
    term::{self, GrammaticalInfo, InvalidWordError, Term, WordType},
    util,
};
use std::borrow::Cow;

/// A single numeral. Values outside 1..=8 never error; every derived form
/// falls back to the numeral's own text.
#[derive(Clone, Debug)]
pub struct Numeral<'a> {
    text: &'a str,
    position: usize,
    normalized: Cow<'a, str>,
    value: u8,
}

impl<'a> Numeral<'a> {
    pub fn try_new(text: &'a str, position: usize, value: u8) -> Result<Self, InvalidWordError> {
        term::validate(text)?;
        Ok(Numeral {
            text,
            position,
            normalized: util::normalize(text),
            value,
        })
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns the cardinal literal for the numeral's value.
    pub fn cardinal(&self) -> Cow<'a, str> {
        match cardinal_of(self.value) {
            Some(literal) => Cow::Borrowed(literal),
            None => Cow::Borrowed(self.text),
        }
    }

    /// Returns the ordinal: the (possibly shortened) cardinal stem plus
    /// `ve`.
    pub fn ordinal(&self) -> String {
        format!("{}ve", self.ordinal_stem())
    }

    /// Returns the fraction. Halves and thirds are irregular words; the rest
    /// attach `pxi` to the ordinal stem.
    pub fn fraction(&self) -> Cow<'a, str> {
        match self.value {
            2 => Cow::Borrowed("mawl"),
            3 => Cow::Borrowed("pan"),
            _ => Cow::Owned(format!("{}pxi", self.ordinal_stem())),
        }
    }

    /// Returns the multiplicative adverbial ("once", "twice", ...). The
    /// first three values have dedicated words; the rest are the
    /// periphrastic `alo a` plus the cardinal.
    pub fn adverbial(&self) -> Cow<'a, str> {
        match self.value {
            1 => Cow::Borrowed("'awlo"),
            2 => Cow::Borrowed("melo"),
            3 => Cow::Borrowed("pxelo"),
            _ => Cow::Owned(format!("alo a{}", self.cardinal())),
        }
    }

    fn ordinal_stem(&self) -> Cow<'a, str> {
        let cardinal = self.cardinal();
        match stem_change_of(&cardinal) {
            Some(stem) => Cow::Borrowed(stem),
            None => cardinal,
        }
    }
}

fn cardinal_of(value: u8) -> Option<&'static str> {
    match value {
        1 => Some("'aw"),
        2 => Some("mune"),
        3 => Some("pxey"),
        4 => Some("tsing"),
        5 => Some("mrr"),
        6 => Some("pukap"),
        7 => Some("kinä"),
        8 => Some("vol"),
        _ => None,
    }
}

// The cardinals whose stem shortens before the ordinal and fraction
// suffixes. Everything else keeps its cardinal form as the stem.
fn stem_change_of(cardinal: &str) -> Option<&'static str> {
    match cardinal {
        "mune" => Some("mu"),
        "tsing" => Some("tsi"),
        "pukap" => Some("pu"),
        "kinä" => Some("ki"),
        _ => None,
    }
}

impl<'a> Term<'a> for Numeral<'a> {
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
        WordType::Numeral
    }

    fn grammatical_info(&self) -> GrammaticalInfo {
        let mut info = term::base_info(self);
        info.insert("value", usize::from(self.value).into());
        info
    }
}
