//! Structs for nouns.
//!
//! # Examples
//!
//! ```
//! use navi_morph::declension::Declinable; // Provides the case methods
//! use navi_morph::grammar::{Case, Number};
//! use navi_morph::noun::Noun;
//!
//! let mut noun = Noun::try_new("kelku", 0).unwrap();
//! assert_eq!(noun.declined(Case::Patientive), "kelkuti");
//! assert_eq!(noun.numbered(Number::Dual), "mehelku");
//! assert!(noun.has_lenition());
//! ```
use crate::{
    declension::{CaseEndings, Declinable},
    grammar::{Case, Gender, Number},
    phonology,
    term::{self, GrammaticalInfo, InvalidWordError, Term, WordType},
    util,
};
use std::borrow::Cow;

/// The attributes a noun is constructed with. The defaults describe a bare
/// vowel-final singular subjective noun, which is also what the classifier
/// fallback produces.
#[derive(Clone, Copy, Debug)]
pub struct NounAttrs {
    pub case: Case,
    pub number: Number,
    pub gender: Gender,
    pub ends_with_vowel: bool,
    pub ends_with_diphthong: bool,
    pub ends_with_pseudovowel: bool,
}

impl Default for NounAttrs {
    fn default() -> Self {
        NounAttrs {
            case: Case::Subjective,
            number: Number::Singular,
            gender: Gender::Neutral,
            ends_with_vowel: true,
            ends_with_diphthong: false,
            ends_with_pseudovowel: false,
        }
    }
}

// Fused dual/plural forms for the one irregular root. Checked before the
// general prefix-plus-lenition rule and leaves the lenition flag untouched.
const IRREGULAR_NUMBERED: &[(&str, Number, &str)] = &[
    ("utral", Number::Dual, "mutral"),
    ("utral", Number::Plural, "autral"),
];

/// A single noun, carrying the phonological attributes its case endings were
/// selected from.
#[derive(Clone, Debug)]
pub struct Noun<'a> {
    text: &'a str,
    position: usize,
    normalized: Cow<'a, str>,
    case: Case,
    number: Number,
    gender: Gender,
    ends_with_vowel: bool,
    ends_with_diphthong: bool,
    ends_with_pseudovowel: bool,
    lenition_applied: bool,
    endings: CaseEndings,
}

impl<'a> Noun<'a> {
    /// Creates a noun with default attributes. Note that nothing in the code
    /// actually ensures that the text is a noun; classification is the
    /// factory's job, and an unrecognized word defaults to exactly this.
    pub fn try_new(text: &'a str, position: usize) -> Result<Self, InvalidWordError> {
        Self::try_with_attrs(text, position, NounAttrs::default())
    }

    pub fn try_with_attrs(
        text: &'a str,
        position: usize,
        attrs: NounAttrs,
    ) -> Result<Self, InvalidWordError> {
        term::validate(text)?;
        let endings =
            CaseEndings::for_stem(text, attrs.ends_with_vowel, attrs.ends_with_diphthong);
        Ok(Noun {
            text,
            position,
            normalized: util::normalize(text),
            case: attrs.case,
            number: attrs.number,
            gender: attrs.gender,
            ends_with_vowel: attrs.ends_with_vowel,
            ends_with_diphthong: attrs.ends_with_diphthong,
            ends_with_pseudovowel: attrs.ends_with_pseudovowel,
            lenition_applied: false,
            endings,
        })
    }

    /// Returns the noun marked for the given number. The dual, trial, and
    /// plural prefixes lenite the stem, which sets the lenition flag; the
    /// irregular fused forms bypass both.
    pub fn numbered(&mut self, number: Number) -> Cow<'a, str> {
        let prefix = number.prefix();
        if prefix.is_empty() {
            return Cow::Borrowed(self.text);
        }
        for (stem, n, fused) in IRREGULAR_NUMBERED {
            if *stem == self.text && *n == number {
                return Cow::Borrowed(*fused);
            }
        }
        let lenited = phonology::lenite(self.text);
        self.lenition_applied = true;
        Cow::Owned(format!("{}{}", prefix, lenited))
    }

    /// Returns the noun marked for number and then declined for case. The
    /// numbered form is re-declined as if it were vowel-final, whatever this
    /// noun's own attributes say; see DESIGN.md for why that stands.
    pub fn numbered_with_case(&mut self, number: Number, case: Case) -> String {
        let numbered = self.numbered(number);
        let endings = CaseEndings::for_stem(&numbered, true, false);
        format!("{}{}", numbered, endings.ending(case))
    }

    /// Returns the indefinite form ("a tree" as opposed to "the tree"),
    /// marked with the suffix `o`.
    pub fn indefinite(&self) -> String {
        format!("{}o", self.text)
    }

    pub fn number(&self) -> Number {
        self.number
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn ends_with_vowel(&self) -> bool {
        self.ends_with_vowel
    }

    pub fn ends_with_diphthong(&self) -> bool {
        self.ends_with_diphthong
    }

    pub fn ends_with_pseudovowel(&self) -> bool {
        self.ends_with_pseudovowel
    }

    /// True once a numbering prefix has lenited this noun's stem.
    pub fn has_lenition(&self) -> bool {
        self.lenition_applied
    }
}

impl<'a> Term<'a> for Noun<'a> {
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
        WordType::Noun
    }

    fn grammatical_info(&self) -> GrammaticalInfo {
        let mut info = term::base_info(self);
        info.insert("case", self.case.as_str().into());
        info.insert("number", self.number.as_str().into());
        info.insert("gender", self.gender.as_str().into());
        info.insert("ends_with_vowel", self.ends_with_vowel.into());
        info.insert("ends_with_diphthong", self.ends_with_diphthong.into());
        info.insert("has_lenition", self.lenition_applied.into());
        info
    }
}

impl<'a> Declinable<'a> for Noun<'a> {
    fn case(&self) -> Case {
        self.case
    }

    fn case_endings(&self) -> &CaseEndings {
        &self.endings
    }
}

#[cfg(test)]
mod tests {
    use super::{Noun, NounAttrs};
    use crate::{
        declension::Declinable,
        grammar::{Case, Number},
        term::Term,
    };

    fn consonant_final(text: &str) -> Noun<'_> {
        Noun::try_with_attrs(
            text,
            0,
            NounAttrs {
                ends_with_vowel: false,
                ..NounAttrs::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn declined() {
        let noun = Noun::try_new("kelku", 0).unwrap();
        let tests = [
            (Case::Subjective, "kelku"),
            (Case::Agentive, "kelkul"),
            (Case::Patientive, "kelkuti"),
            (Case::Dative, "kelkuru"),
            (Case::Genitive, "kelkuä"),
            (Case::Topical, "kelkuri"),
        ];
        for (case, form) in tests {
            assert_eq!(noun.declined(case), form, "kelku {:?}", case);
        }

        // A vowel-final stem not ending in o or u takes the yä genitive.
        let noun = Noun::try_new("iknimaya", 0).unwrap();
        assert_eq!(noun.declined(Case::Genitive), "iknimayayä");

        let noun = consonant_final("utral");
        assert_eq!(noun.declined(Case::Agentive), "utralil");
        assert_eq!(noun.declined(Case::Patientive), "utralit");
        assert_eq!(noun.declined(Case::Dative), "utralur");
        assert_eq!(noun.declined(Case::Genitive), "utralä");
        assert_eq!(noun.declined(Case::Topical), "utraliri");
    }

    #[test]
    fn declined_named() {
        let noun = Noun::try_new("kelku", 0).unwrap();
        assert_eq!(noun.declined_named("patientive").unwrap(), "kelkuti");
        assert!(noun.declined_named("vocative").is_err());
        assert!(noun.declined_named("").is_err());
    }

    #[test]
    fn numbered() {
        let mut noun = Noun::try_new("kelku", 0).unwrap();
        assert_eq!(noun.numbered(Number::Singular), "kelku");
        assert!(!noun.has_lenition());

        assert_eq!(noun.numbered(Number::Dual), "mehelku");
        assert!(noun.has_lenition());

        assert_eq!(noun.numbered(Number::Trial), "pxehelku");
        assert_eq!(noun.numbered(Number::Plural), "ayhelku");
        // The flag is sticky across repeated calls.
        assert!(noun.has_lenition());

        let mut noun = Noun::try_new("pxun", 0).unwrap();
        assert_eq!(noun.numbered(Number::Plural), "aypun");
    }

    #[test]
    fn numbered_irregular() {
        let mut noun = consonant_final("utral");
        assert_eq!(noun.numbered(Number::Dual), "mutral");
        assert_eq!(noun.numbered(Number::Plural), "autral");
        // The fused forms are not built by lenition.
        assert!(!noun.has_lenition());

        // The trial has no fused form and falls through to the general rule;
        // no lenition rule matches a vowel-initial stem.
        assert_eq!(noun.numbered(Number::Trial), "pxeutral");
        assert!(noun.has_lenition());
    }

    #[test]
    fn numbered_with_case() {
        let mut noun = Noun::try_new("kelku", 0).unwrap();
        assert_eq!(
            noun.numbered_with_case(Number::Dual, Case::Patientive),
            "mehelkuti"
        );
        assert_eq!(
            noun.numbered_with_case(Number::Singular, Case::Genitive),
            "kelkuä"
        );

        // The numbered form is re-declined under vowel-final defaults even
        // when the stem is consonant-final.
        let mut noun = consonant_final("pxun");
        assert_eq!(
            noun.numbered_with_case(Number::Plural, Case::Patientive),
            "aypunti"
        );
    }

    #[test]
    fn indefinite() {
        let noun = Noun::try_new("utral", 0).unwrap();
        assert_eq!(noun.indefinite(), "utralo");
    }

    #[test]
    fn grammatical_info() {
        let noun = Noun::try_new("Kelku", 3).unwrap();
        let info = noun.grammatical_info();
        assert_eq!(info["text"], "Kelku".into());
        assert_eq!(info["normalized"], "kelku".into());
        assert_eq!(info["position"], 3usize.into());
        assert_eq!(info["word_type"], "noun".into());
        assert_eq!(info["number"], "singular".into());
        assert_eq!(info["has_lenition"], false.into());
    }

    #[test]
    fn invalid_words() {
        assert!(Noun::try_new("", 0).is_err());
        assert!(Noun::try_new("zz1", 0).is_err());
        assert!(Noun::try_new("two words", 0).is_err());
    }
}
