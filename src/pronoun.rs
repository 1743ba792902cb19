//! Structs for pronouns.
//!
//! Pronouns decline like vowel-final nouns, but carry a set of irregular
//! forms keyed by the canonical pronoun text: genitives, honorifics, the
//! gendered third-person forms, and the short plural contractions.
//!
//! # Examples
//!
//! ```
//! use navi_morph::grammar::Person;
//! use navi_morph::pronoun::{Pronoun, PronounAttrs};
//!
//! let attrs = PronounAttrs {
//!     person: Person::First,
//!     ..PronounAttrs::default()
//! };
//! let pronoun = Pronoun::try_with_attrs("oe", 0, attrs).unwrap();
//! assert_eq!(pronoun.genitive(), "oeyä");
//! assert_eq!(pronoun.honorific_form(), "ohe");
//! ```
use crate::{
    declension::{CaseEndings, Declinable},
    grammar::{Animacy, Case, Gender, Inclusivity, Number, Person},
    term::{self, GrammaticalInfo, InvalidWordError, Term, WordType},
    util,
};
use once_cell::sync::Lazy;
use std::{borrow::Cow, collections::HashMap};

static IRREGULAR_GENITIVES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut forms = HashMap::new();
    forms.insert("fko", "fkeyä");
    forms.insert("nga", "ngeyä");
    forms.insert("po", "peyä");
    forms.insert("sno", "sneyä");
    forms.insert("tsa'u", "tseyä");
    forms.insert("fo", "feyä");
    forms.insert("awnga", "awngeyä");
    forms.insert("ayoeng", "ayoengeyä");
    forms.insert("oe", "oeyä");
    forms.insert("moe", "moeyä");
    forms.insert("pxoe", "pxoeyä");
    forms.insert("ayoe", "ayoeyä");
    forms.insert("oeng", "oengeyä");
    forms.insert("pxoeng", "pxoengeyä");
    forms
});

static HONORIFIC_FORMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut forms = HashMap::new();
    forms.insert("oe", "ohe");
    forms.insert("moe", "mohe");
    forms.insert("pxoe", "pxohe");
    forms.insert("ayoe", "ayohe");
    forms.insert("oeng", "oheng");
    forms.insert("pxoeng", "pxoheng");
    forms.insert("ayoeng", "ayoheng");
    forms.insert("nga", "ngenga");
    forms.insert("menga", "mengenga");
    forms.insert("pxenga", "pxengenga");
    forms.insert("aynga", "ayngenga");
    forms.insert("po", "poho");
    forms
});

static SHORT_FORMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut forms = HashMap::new();
    forms.insert("ayoeng", "awnga");
    forms.insert("ayfo", "fo");
    forms.insert("aysa'u", "sa'u");
    forms
});

// Derived pronouns built from these prefixes contract their "po" ending in
// the genitive: tsapo -> tsapeyä.
const CONTRACTING_PREFIXES: &[&str] = &["fra", "'aw", "la", "fì", "tsa"];

/// The attributes a pronoun is constructed with.
#[derive(Clone, Copy, Debug)]
pub struct PronounAttrs {
    pub case: Case,
    pub person: Person,
    pub number: Number,
    pub animacy: Animacy,
    pub inclusivity: Inclusivity,
    pub gender: Gender,
    pub is_honorific: bool,
}

impl Default for PronounAttrs {
    fn default() -> Self {
        PronounAttrs {
            case: Case::Subjective,
            person: Person::Third,
            number: Number::Singular,
            animacy: Animacy::Animate,
            inclusivity: Inclusivity::Exclusive,
            gender: Gender::Neutral,
            is_honorific: false,
        }
    }
}

/// A single pronoun.
#[derive(Clone, Debug)]
pub struct Pronoun<'a> {
    text: &'a str,
    position: usize,
    normalized: Cow<'a, str>,
    case: Case,
    person: Person,
    number: Number,
    animacy: Animacy,
    inclusivity: Inclusivity,
    gender: Gender,
    is_honorific: bool,
    endings: CaseEndings,
}

impl<'a> Pronoun<'a> {
    pub fn try_new(text: &'a str, position: usize) -> Result<Self, InvalidWordError> {
        Self::try_with_attrs(text, position, PronounAttrs::default())
    }

    pub fn try_with_attrs(
        text: &'a str,
        position: usize,
        attrs: PronounAttrs,
    ) -> Result<Self, InvalidWordError> {
        term::validate(text)?;
        // Pronouns are phonologically simple and decline like vowel-final
        // nouns.
        let endings = CaseEndings::for_stem(text, true, false);
        Ok(Pronoun {
            text,
            position,
            normalized: util::normalize(text),
            case: attrs.case,
            person: attrs.person,
            number: attrs.number,
            animacy: attrs.animacy,
            inclusivity: attrs.inclusivity,
            gender: attrs.gender,
            is_honorific: attrs.is_honorific,
            endings,
        })
    }

    /// Returns the genitive form, which is irregular for most of the closed
    /// pronoun set. Pronouns derived with a prenoun prefix contract their
    /// final "po"; anything outside the tables takes the regular `ä` suffix.
    pub fn genitive(&self) -> Cow<'a, str> {
        if self.text.ends_with("po")
            && CONTRACTING_PREFIXES.iter().any(|p| self.text.starts_with(p))
        {
            let base = &self.text[..self.text.len() - "po".len()];
            return Cow::Owned(format!("{}peyä", base));
        }

        match IRREGULAR_GENITIVES.get(self.text) {
            Some(form) => Cow::Borrowed(*form),
            None => Cow::Owned(format!("{}ä", self.text)),
        }
    }

    /// Returns the honorific (ceremonial-register) form. The third-person
    /// singular animate forms are conditioned on gender; the rest come from
    /// a substitution table, falling back to the text itself.
    pub fn honorific_form(&self) -> Cow<'a, str> {
        if self.person == Person::Third
            && self.number == Number::Singular
            && self.animacy == Animacy::Animate
        {
            return if self.gender == Gender::Male {
                Cow::Borrowed("pohan")
            } else {
                Cow::Borrowed("pohe")
            };
        }

        match HONORIFIC_FORMS.get(self.text) {
            Some(form) => Cow::Borrowed(*form),
            None => Cow::Borrowed(self.text),
        }
    }

    /// Returns the gender-marked third-person singular animate form, or the
    /// text unchanged for every other pronoun.
    pub fn gendered_form(&self) -> &'a str {
        if self.person == Person::Third
            && self.number == Number::Singular
            && self.animacy == Animacy::Animate
        {
            return if self.gender == Gender::Male { "poan" } else { "poe" };
        }
        self.text
    }

    /// Returns the contracted short form of the three plural pronouns that
    /// have one, or the text unchanged.
    pub fn short_form(&self) -> &'a str {
        match SHORT_FORMS.get(self.text) {
            Some(form) => *form,
            None => self.text,
        }
    }

    pub fn person(&self) -> Person {
        self.person
    }

    pub fn number(&self) -> Number {
        self.number
    }

    pub fn is_animate(&self) -> bool {
        self.animacy == Animacy::Animate
    }

    pub fn is_inclusive(&self) -> bool {
        self.inclusivity == Inclusivity::Inclusive
    }

    pub fn is_honorific(&self) -> bool {
        self.is_honorific
    }
}

impl<'a> Term<'a> for Pronoun<'a> {
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
        WordType::Pronoun
    }

    fn grammatical_info(&self) -> GrammaticalInfo {
        let mut info = term::base_info(self);
        info.insert("case", self.case.as_str().into());
        info.insert("person", self.person.as_str().into());
        info.insert("number", self.number.as_str().into());
        info.insert("animacy", self.animacy.as_str().into());
        info.insert("inclusivity", self.inclusivity.as_str().into());
        info.insert("gender", self.gender.as_str().into());
        info.insert("is_honorific", self.is_honorific.into());
        info
    }
}

impl<'a> Declinable<'a> for Pronoun<'a> {
    fn case(&self) -> Case {
        self.case
    }

    fn case_endings(&self) -> &CaseEndings {
        &self.endings
    }
}

#[cfg(test)]
mod tests {
    use super::{Pronoun, PronounAttrs};
    use crate::{
        declension::Declinable,
        grammar::{Animacy, Case, Gender, Number, Person},
    };

    fn first_person(text: &str) -> Pronoun<'_> {
        Pronoun::try_with_attrs(
            text,
            0,
            PronounAttrs {
                person: Person::First,
                ..PronounAttrs::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn declined() {
        // Pronouns always decline as vowel-final stems.
        let pronoun = first_person("oe");
        assert_eq!(pronoun.declined(Case::Subjective), "oe");
        assert_eq!(pronoun.declined(Case::Agentive), "oel");
        assert_eq!(pronoun.declined(Case::Patientive), "oeti");
        assert_eq!(pronoun.declined(Case::Dative), "oeru");
        assert_eq!(pronoun.declined(Case::Topical), "oeri");

        let pronoun = Pronoun::try_new("fko", 0).unwrap();
        assert_eq!(pronoun.declined(Case::Genitive), "fkoä");
    }

    #[test]
    fn genitive() {
        let tests = [
            ("oe", "oeyä"),
            ("nga", "ngeyä"),
            ("po", "peyä"),
            ("fko", "fkeyä"),
            ("ayoeng", "ayoengeyä"),
            ("tsa'u", "tseyä"),
            // Derived pronouns contract their "po" ending.
            ("tsapo", "tsapeyä"),
            ("frapo", "frapeyä"),
            ("fìpo", "fìpeyä"),
            // Outside every table: regular suffix.
            ("tsatu", "tsatuä"),
        ];
        for (text, form) in tests {
            let pronoun = Pronoun::try_new(text, 0).unwrap();
            assert_eq!(pronoun.genitive(), form, "genitive of {}", text);
        }
    }

    #[test]
    fn honorific_form() {
        assert_eq!(first_person("oe").honorific_form(), "ohe");
        assert_eq!(first_person("ayoe").honorific_form(), "ayohe");

        let nga = Pronoun::try_with_attrs(
            "nga",
            0,
            PronounAttrs {
                person: Person::Second,
                ..PronounAttrs::default()
            },
        )
        .unwrap();
        assert_eq!(nga.honorific_form(), "ngenga");

        // Third-person singular animate is conditioned on gender, not the
        // table.
        let po = Pronoun::try_new("po", 0).unwrap();
        assert_eq!(po.honorific_form(), "pohe");

        let po = Pronoun::try_with_attrs(
            "po",
            0,
            PronounAttrs {
                gender: Gender::Male,
                ..PronounAttrs::default()
            },
        )
        .unwrap();
        assert_eq!(po.honorific_form(), "pohan");

        // An inanimate "po" falls through to the substitution table.
        let po = Pronoun::try_with_attrs(
            "po",
            0,
            PronounAttrs {
                animacy: Animacy::Inanimate,
                ..PronounAttrs::default()
            },
        )
        .unwrap();
        assert_eq!(po.honorific_form(), "poho");

        // Unknown pronouns come back unchanged.
        assert_eq!(first_person("sno").honorific_form(), "sno");
    }

    #[test]
    fn gendered_form() {
        let po = Pronoun::try_new("po", 0).unwrap();
        assert_eq!(po.gendered_form(), "poe");

        let po = Pronoun::try_with_attrs(
            "po",
            0,
            PronounAttrs {
                gender: Gender::Male,
                ..PronounAttrs::default()
            },
        )
        .unwrap();
        assert_eq!(po.gendered_form(), "poan");

        let fo = Pronoun::try_with_attrs(
            "fo",
            0,
            PronounAttrs {
                number: Number::Plural,
                ..PronounAttrs::default()
            },
        )
        .unwrap();
        assert_eq!(fo.gendered_form(), "fo");
    }

    #[test]
    fn short_form() {
        let tests = [
            ("ayoeng", "awnga"),
            ("ayfo", "fo"),
            ("aysa'u", "sa'u"),
            ("oe", "oe"),
        ];
        for (text, form) in tests {
            let pronoun = Pronoun::try_new(text, 0).unwrap();
            assert_eq!(pronoun.short_form(), form, "short form of {}", text);
        }
    }
}
