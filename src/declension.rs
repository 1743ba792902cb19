//! The [Declinable] capability shared by nouns and pronouns.
//!
//! Case endings are selected once, at construction, from a word's
//! phonological attributes. The six formulas live here so that pronouns can
//! reuse the noun endings under their own attributes.

use crate::{
    grammar::{Case, UnknownCaseError},
    term::Term,
};
use std::borrow::Cow;

/// The case-ending table for one word, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseEndings {
    agentive: &'static str,
    patientive: &'static str,
    dative: &'static str,
    genitive: &'static str,
    topical: &'static str,
}

impl CaseEndings {
    /// Selects endings from the stem's phonological attributes. The stem
    /// itself is only consulted for the genitive, which contracts after `o`
    /// and `u`.
    pub(crate) fn for_stem(stem: &str, ends_with_vowel: bool, ends_with_diphthong: bool) -> Self {
        let open_final = ends_with_vowel || ends_with_diphthong;
        CaseEndings {
            agentive: if ends_with_vowel { "l" } else { "il" },
            patientive: if open_final { "ti" } else { "it" },
            dative: if open_final { "ru" } else { "ur" },
            genitive: if ends_with_vowel && !(stem.ends_with('o') || stem.ends_with('u')) {
                "yä"
            } else {
                "ä"
            },
            topical: if ends_with_vowel { "ri" } else { "iri" },
        }
    }

    pub fn ending(&self, case: Case) -> &'static str {
        match case {
            Case::Subjective => "",
            Case::Agentive => self.agentive,
            Case::Patientive => self.patientive,
            Case::Dative => self.dative,
            Case::Genitive => self.genitive,
            Case::Topical => self.topical,
        }
    }
}

/// Implemented by words that decline for case.
pub trait Declinable<'a>: Term<'a> {
    /// The case the word was constructed with.
    fn case(&self) -> Case;

    fn case_endings(&self) -> &CaseEndings;

    /// Returns the surface form declined under the given case. The
    /// subjective is the bare text and borrows.
    fn declined(&self, case: Case) -> Cow<'a, str> {
        let ending = self.case_endings().ending(case);
        if ending.is_empty() {
            Cow::Borrowed(self.text())
        } else {
            Cow::Owned(format!("{}{}", self.text(), ending))
        }
    }

    /// Like [declined](Declinable::declined), but takes the case by name,
    /// failing for names outside the six recognized tags.
    fn declined_named(&self, case: &str) -> Result<Cow<'a, str>, UnknownCaseError> {
        Ok(self.declined(case.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::CaseEndings;
    use crate::grammar::Case;

    #[test]
    fn for_stem() {
        // (stem, ends_with_vowel, ends_with_diphthong, expected endings in
        // case order: agentive, patientive, dative, genitive, topical)
        let tests = [
            ("kelku", true, false, ["l", "ti", "ru", "ä", "ri"]),
            ("utral", false, false, ["il", "it", "ur", "ä", "iri"]),
            ("tìrey", false, true, ["il", "ti", "ru", "ä", "iri"]),
            ("samsiyu", true, false, ["l", "ti", "ru", "ä", "ri"]),
            ("iknimaya", true, false, ["l", "ti", "ru", "yä", "ri"]),
        ];
        for (stem, vowel, diphthong, expected) in tests {
            let endings = CaseEndings::for_stem(stem, vowel, diphthong);
            assert_eq!(endings.ending(Case::Subjective), "", "{} subjective", stem);
            let cases = [
                Case::Agentive,
                Case::Patientive,
                Case::Dative,
                Case::Genitive,
                Case::Topical,
            ];
            for (case, ending) in cases.iter().zip(expected) {
                assert_eq!(endings.ending(*case), ending, "{} {:?}", stem, case);
            }
        }
    }
}
