//! The classifier chain and word factory.
//!
//! Each classifier owns a closed lookup table keyed by lower-cased surface
//! text. The factory runs the classifiers in a fixed priority order and
//! returns the first successful classification; a token no table knows
//! becomes a default singular subjective noun, so classification never fails
//! for orthography-valid text.
//!
//! # Examples
//!
//! ```
//! use navi_morph::factory::WordFactory;
//! use navi_morph::word::Word;
//!
//! let factory = WordFactory::new();
//! let word = factory.make_word("taron", 0).unwrap();
//! assert!(matches!(word, Word::Verb(_)));
//!
//! let word = factory.make_word("zzqx", 0).unwrap();
//! assert!(matches!(word, Word::Noun(_)));
//! ```
use crate::{
    adjective::Adjective,
    grammar::{Animacy, Gender, Inclusivity, Number, Person},
    noun::{Noun, NounAttrs},
    numeral::Numeral,
    particle::{Particle, ParticleType},
    phonology,
    prenoun::{Prenoun, PrenounType},
    pronoun::{Pronoun, PronounAttrs},
    term::InvalidWordError,
    util,
    verb::{Transitivity, Verb},
    word::Word,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{borrow::Cow, collections::HashMap};

/// A single category classifier: a membership test plus construction of the
/// matching word variant.
pub trait Classifier {
    fn can_classify(&self, token: &str) -> bool;

    /// Constructs the word for a token this classifier recognizes, or `None`
    /// for one it does not. Construction itself can still fail on
    /// non-orthographic text.
    fn classify<'a>(
        &self,
        token: &'a str,
        position: usize,
    ) -> Result<Option<Word<'a>>, InvalidWordError>;
}

static PARTICLES: Lazy<HashMap<&'static str, ParticleType>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert("srak", ParticleType::Question);
    table.insert("kefyak", ParticleType::Question);
    table.insert("pe", ParticleType::Question);
    table.insert("pefnel", ParticleType::Question);
    table.insert("pehem", ParticleType::Question);
    table.insert("pehrr", ParticleType::Question);
    table.insert("ma", ParticleType::Vocative);
    table.insert("sì", ParticleType::Conjunction);
    table.insert("ulte", ParticleType::Conjunction);
    table.insert("fu", ParticleType::Conditional);
    table.insert("to", ParticleType::Conditional);
    table.insert("nang", ParticleType::Negative);
    table.insert("srane", ParticleType::Affirmative);
    table.insert("kehe", ParticleType::Negative);
    table.insert("o", ParticleType::Exclamative);
    table.insert("au", ParticleType::Exclamative);
    table
});

static NUMERALS: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert("'aw", 1);
    table.insert("mune", 2);
    table.insert("pxey", 3);
    table.insert("tsing", 4);
    table.insert("mrr", 5);
    table.insert("pukap", 6);
    table.insert("kinä", 7);
    table.insert("vol", 8);
    table
});

static PRENOUNS: Lazy<HashMap<&'static str, PrenounType>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert("fì", PrenounType::Deictic);
    table.insert("tsa", PrenounType::Deictic);
    table.insert("fra", PrenounType::Relative);
    table.insert("pe", PrenounType::Interrogative);
    table.insert("fay", PrenounType::Negative);
    table.insert("fayl", PrenounType::Negative);
    table.insert("taw", PrenounType::Demonstrative);
    table
});

struct PronounEntry {
    person: Person,
    number: Number,
    animacy: Animacy,
    inclusivity: Inclusivity,
}

impl PronounEntry {
    fn new(person: Person, number: Number) -> Self {
        PronounEntry {
            person,
            number,
            animacy: Animacy::Animate,
            inclusivity: Inclusivity::Exclusive,
        }
    }
}

static PRONOUNS: Lazy<HashMap<&'static str, PronounEntry>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert("oe", PronounEntry::new(Person::First, Number::Singular));
    table.insert("oel", PronounEntry::new(Person::First, Number::Singular));
    table.insert("nga", PronounEntry::new(Person::Second, Number::Singular));
    table.insert("ngati", PronounEntry::new(Person::Second, Number::Singular));
    table.insert("po", PronounEntry::new(Person::Third, Number::Singular));
    table.insert("fo", PronounEntry::new(Person::Third, Number::Plural));
    table.insert("moe", PronounEntry::new(Person::First, Number::Dual));
    table.insert("menga", PronounEntry::new(Person::Second, Number::Dual));
    table.insert("mefo", PronounEntry::new(Person::Third, Number::Dual));
    table.insert(
        "ayoeng",
        PronounEntry {
            inclusivity: Inclusivity::Inclusive,
            ..PronounEntry::new(Person::First, Number::Plural)
        },
    );
    table.insert("aynga", PronounEntry::new(Person::Second, Number::Plural));
    table.insert("ayfo", PronounEntry::new(Person::Third, Number::Plural));
    table.insert("fko", PronounEntry::new(Person::Third, Number::Singular));
    table.insert(
        "tsaw",
        PronounEntry {
            animacy: Animacy::Inanimate,
            ..PronounEntry::new(Person::Third, Number::Singular)
        },
    );
    table
});

// Surface text to is_color.
static ADJECTIVES: Lazy<HashMap<&'static str, bool>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert("sìltsan", false);
    table.insert("kaltxì", false);
    table.insert("lor", false);
    table.insert("ean", false);
    table.insert("txep", false);
    table.insert("nìaw", false);
    table.insert("nìawve", false);
    table.insert("rit", false);
    table.insert("tstxen", false);
    table.insert("hìn", false);
    table.insert("ehu", true);
    table.insert("puk", true);
    table.insert("titin", true);
    table.insert("kllkxik", true);
    table.insert("fpam", true);
    table.insert("srr", true);
    table.insert("unil", true);
    table.insert("teng", true);
    table.insert("kxam", true);
    table
});

static VERBS: Lazy<HashMap<&'static str, Transitivity>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert("taron", Transitivity::Transitive);
    table.insert("kameie", Transitivity::Transitive);
    table.insert("tìng", Transitivity::Intransitive);
    table.insert("za'u", Transitivity::Intransitive);
    table.insert("kä", Transitivity::Intransitive);
    table.insert("oe", Transitivity::Intransitive);
    table.insert("tul", Transitivity::Intransitive);
    table.insert("hahaw", Transitivity::Intransitive);
    table.insert("fpe'o", Transitivity::Transitive);
    table.insert("sivar", Transitivity::Intransitive);
    table.insert("yom", Transitivity::Transitive);
    table.insert("tswayon", Transitivity::Transitive);
    table
});

struct NounEntry {
    gender: Gender,
    ends_with_vowel: bool,
}

static NOUNS: Lazy<HashMap<&'static str, NounEntry>> = Lazy::new(|| {
    let mut table = HashMap::new();
    let mut insert = |text, gender, ends_with_vowel| {
        table.insert(
            text,
            NounEntry {
                gender,
                ends_with_vowel,
            },
        );
    };
    insert("utral", Gender::Neutral, true);
    insert("tsmukan", Gender::Male, false);
    insert("tsmuke", Gender::Female, false);
    insert("tìrey", Gender::Neutral, true);
    insert("kelku", Gender::Neutral, true);
    insert("pxun", Gender::Neutral, false);
    insert("atan", Gender::Neutral, false);
    insert("samsiyu", Gender::Neutral, true);
    insert("iknimaya", Gender::Neutral, true);
    insert("hrrap", Gender::Neutral, false);
    table
});

static INFIX_MARKUP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Could not parse infix markup regex"));

fn strip_infix_markup(token: &str) -> Cow<'_, str> {
    INFIX_MARKUP_REGEX.replace_all(token, "")
}

pub struct ParticleClassifier;

impl Classifier for ParticleClassifier {
    fn can_classify(&self, token: &str) -> bool {
        PARTICLES.contains_key(util::normalize(token).as_ref())
    }

    fn classify<'a>(
        &self,
        token: &'a str,
        position: usize,
    ) -> Result<Option<Word<'a>>, InvalidWordError> {
        match PARTICLES.get(util::normalize(token).as_ref()) {
            Some(particle_type) => {
                Ok(Some(Particle::try_new(token, position, *particle_type)?.into()))
            }
            None => Ok(None),
        }
    }
}

pub struct NumeralClassifier;

impl Classifier for NumeralClassifier {
    fn can_classify(&self, token: &str) -> bool {
        NUMERALS.contains_key(util::normalize(token).as_ref())
    }

    fn classify<'a>(
        &self,
        token: &'a str,
        position: usize,
    ) -> Result<Option<Word<'a>>, InvalidWordError> {
        match NUMERALS.get(util::normalize(token).as_ref()) {
            Some(value) => Ok(Some(Numeral::try_new(token, position, *value)?.into())),
            None => Ok(None),
        }
    }
}

pub struct PrenounClassifier;

impl Classifier for PrenounClassifier {
    fn can_classify(&self, token: &str) -> bool {
        PRENOUNS.contains_key(util::normalize(token).as_ref())
    }

    fn classify<'a>(
        &self,
        token: &'a str,
        position: usize,
    ) -> Result<Option<Word<'a>>, InvalidWordError> {
        match PRENOUNS.get(util::normalize(token).as_ref()) {
            Some(prenoun_type) => {
                Ok(Some(Prenoun::try_new(token, position, *prenoun_type)?.into()))
            }
            None => Ok(None),
        }
    }
}

pub struct PronounClassifier;

impl Classifier for PronounClassifier {
    fn can_classify(&self, token: &str) -> bool {
        PRONOUNS.contains_key(util::normalize(token).as_ref())
    }

    fn classify<'a>(
        &self,
        token: &'a str,
        position: usize,
    ) -> Result<Option<Word<'a>>, InvalidWordError> {
        let entry = match PRONOUNS.get(util::normalize(token).as_ref()) {
            Some(entry) => entry,
            None => return Ok(None),
        };
        let attrs = PronounAttrs {
            person: entry.person,
            number: entry.number,
            animacy: entry.animacy,
            inclusivity: entry.inclusivity,
            ..PronounAttrs::default()
        };
        Ok(Some(Pronoun::try_with_attrs(token, position, attrs)?.into()))
    }
}

pub struct AdjectiveClassifier;

impl Classifier for AdjectiveClassifier {
    fn can_classify(&self, token: &str) -> bool {
        ADJECTIVES.contains_key(util::normalize(token).as_ref())
    }

    fn classify<'a>(
        &self,
        token: &'a str,
        position: usize,
    ) -> Result<Option<Word<'a>>, InvalidWordError> {
        let normalized = util::normalize(token);
        let is_color = match ADJECTIVES.get(normalized.as_ref()) {
            Some(is_color) => *is_color,
            None => return Ok(None),
        };
        let derived_with_le = normalized.starts_with("le");
        Ok(Some(
            Adjective::try_with_attrs(token, position, derived_with_le, is_color)?.into(),
        ))
    }
}

pub struct VerbClassifier;

impl Classifier for VerbClassifier {
    fn can_classify(&self, token: &str) -> bool {
        let normalized = util::normalize(token);
        VERBS.contains_key(strip_infix_markup(&normalized).as_ref())
    }

    // Tokens may carry bracketed infix markup like "t<ol>aron". The markup
    // is stripped before lookup, and a marked-up token is classified under
    // its canonical stem, since angle brackets are not orthographic.
    fn classify<'a>(
        &self,
        token: &'a str,
        position: usize,
    ) -> Result<Option<Word<'a>>, InvalidWordError> {
        let normalized = util::normalize(token);
        let cleaned = strip_infix_markup(&normalized);
        let (stem, transitivity) = match VERBS.get_key_value(cleaned.as_ref()) {
            Some((stem, transitivity)) => (*stem, *transitivity),
            None => return Ok(None),
        };
        let text = if cleaned == normalized { token } else { stem };
        let is_compound = cleaned.contains('-') || cleaned.chars().count() > 8;
        Ok(Some(
            Verb::try_with_attrs(text, position, transitivity, is_compound)?.into(),
        ))
    }
}

pub struct NounClassifier;

impl Classifier for NounClassifier {
    fn can_classify(&self, token: &str) -> bool {
        NOUNS.contains_key(util::normalize(token).as_ref())
    }

    fn classify<'a>(
        &self,
        token: &'a str,
        position: usize,
    ) -> Result<Option<Word<'a>>, InvalidWordError> {
        let normalized = util::normalize(token);
        let entry = match NOUNS.get(normalized.as_ref()) {
            Some(entry) => entry,
            None => return Ok(None),
        };
        let attrs = NounAttrs {
            gender: entry.gender,
            ends_with_vowel: entry.ends_with_vowel,
            ends_with_diphthong: phonology::ends_with_diphthong(&normalized),
            ..NounAttrs::default()
        };
        Ok(Some(Noun::try_with_attrs(token, position, attrs)?.into()))
    }
}

// Kinship and person-reference nouns that mark the token after a vocative
// "ma" as an address.
const VOCATIVE_FOLLOWERS: &[&str] = &["tsmukan", "tsmuke", "tute"];

/// A token with its neighborhood, for the context-aware classification path.
pub struct ClassificationContext<'a> {
    token: &'a str,
    position: usize,
    all_tokens: &'a [&'a str],
}

impl<'a> ClassificationContext<'a> {
    pub fn new(token: &'a str, position: usize, all_tokens: &'a [&'a str]) -> Self {
        ClassificationContext {
            token,
            position,
            all_tokens,
        }
    }

    pub fn token(&self) -> &'a str {
        self.token
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn previous_token(&self) -> Option<&'a str> {
        self.position
            .checked_sub(1)
            .and_then(|i| self.all_tokens.get(i).copied())
    }

    pub fn next_token(&self) -> Option<&'a str> {
        self.all_tokens.get(self.position + 1).copied()
    }
}

/// Classifies tokens by running the category classifiers in a fixed priority
/// order: particle, numeral, prenoun, pronoun, adjective, verb, noun. The
/// order resolves collisions between categories sharing a surface form.
pub struct WordFactory {
    classifiers: Vec<Box<dyn Classifier>>,
}

impl WordFactory {
    pub fn new() -> Self {
        WordFactory {
            classifiers: vec![
                Box::new(ParticleClassifier),
                Box::new(NumeralClassifier),
                Box::new(PrenounClassifier),
                Box::new(PronounClassifier),
                Box::new(AdjectiveClassifier),
                Box::new(VerbClassifier),
                Box::new(NounClassifier),
            ],
        }
    }

    /// Classifies one token. A token no classifier recognizes becomes a
    /// default singular subjective noun.
    pub fn make_word<'a>(
        &self,
        token: &'a str,
        position: usize,
    ) -> Result<Word<'a>, InvalidWordError> {
        for classifier in &self.classifiers {
            if classifier.can_classify(token) {
                if let Some(word) = classifier.classify(token, position)? {
                    return Ok(word);
                }
            }
        }
        Ok(Noun::try_new(token, position)?.into())
    }

    /// Classifies one token with its neighbors in view. A vocative "ma"
    /// directly followed by a kinship or person-reference noun is forced to
    /// particle ahead of the normal chain; everything else takes the normal
    /// chain.
    pub fn make_word_in_context<'a>(
        &self,
        context: &ClassificationContext<'a>,
    ) -> Result<Word<'a>, InvalidWordError> {
        if util::normalize(context.token()) == "ma" {
            if let Some(next) = context.next_token() {
                if VOCATIVE_FOLLOWERS.contains(&util::normalize(next).as_ref()) {
                    if let Some(word) =
                        ParticleClassifier.classify(context.token(), context.position())?
                    {
                        return Ok(word);
                    }
                }
            }
        }
        self.make_word(context.token(), context.position())
    }
}

impl Default for WordFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassificationContext, WordFactory};
    use crate::{
        grammar::{Number, Person},
        particle::ParticleType,
        term::Term,
        word::Word,
    };

    #[test]
    fn classifies_each_category() {
        let factory = WordFactory::new();
        let tests = [
            ("srak", "particle"),
            ("mune", "numeral"),
            ("fra", "prenoun"),
            ("nga", "pronoun"),
            ("lor", "adjective"),
            ("taron", "verb"),
            ("utral", "noun"),
        ];
        for (token, word_type) in tests {
            let word = factory.make_word(token, 0).unwrap();
            assert_eq!(word.word_type().as_str(), word_type, "{}", token);
        }
    }

    #[test]
    fn precedence_resolves_shared_surface_forms() {
        let factory = WordFactory::new();

        // "oe" is in both the pronoun and verb tables; the pronoun
        // classifier runs first.
        let word = factory.make_word("oe", 0).unwrap();
        match word {
            Word::Pronoun(pronoun) => {
                assert_eq!(pronoun.person(), Person::First);
                assert_eq!(pronoun.number(), Number::Singular);
            }
            other => panic!("oe classified as {:?}", other.word_type()),
        }

        // "pe" is in both the particle and prenoun tables; the particle
        // classifier runs first.
        let word = factory.make_word("pe", 0).unwrap();
        match word {
            Word::Particle(particle) => {
                assert_eq!(particle.particle_type(), ParticleType::Question);
            }
            other => panic!("pe classified as {:?}", other.word_type()),
        }
    }

    #[test]
    fn unknown_token_falls_back_to_noun() {
        let factory = WordFactory::new();
        let word = factory.make_word("zzqx", 4).unwrap();
        match word {
            Word::Noun(noun) => {
                assert_eq!(noun.text(), "zzqx");
                assert_eq!(noun.position(), 4);
                let info = noun.grammatical_info();
                assert_eq!(info["case"], "subjective".into());
                assert_eq!(info["number"], "singular".into());
            }
            other => panic!("zzqx classified as {:?}", other.word_type()),
        }
    }

    #[test]
    fn classification_preserves_casing() {
        let factory = WordFactory::new();
        let word = factory.make_word("Srak", 0).unwrap();
        assert!(matches!(word, Word::Particle(_)));
        assert_eq!(word.text(), "Srak");
        assert_eq!(word.normalized(), "srak");
    }

    #[test]
    fn invalid_token_fails_classification() {
        let factory = WordFactory::new();
        assert!(factory.make_word("zz1", 0).is_err());
        assert!(factory.make_word("", 0).is_err());
    }

    #[test]
    fn verb_classifier_strips_infix_markup() {
        let factory = WordFactory::new();
        let word = factory.make_word("t<ol>aron", 0).unwrap();
        match word {
            Word::Verb(verb) => {
                assert_eq!(verb.text(), "taron");
                assert!(verb.is_transitive());
                assert!(!verb.is_compound());
            }
            other => panic!("t<ol>aron classified as {:?}", other.word_type()),
        }
    }

    #[test]
    fn noun_classifier_fills_phonological_attributes() {
        let factory = WordFactory::new();
        let word = factory.make_word("tìrey", 0).unwrap();
        match word {
            Word::Noun(noun) => {
                assert!(noun.ends_with_vowel());
                assert!(noun.ends_with_diphthong());
            }
            other => panic!("tìrey classified as {:?}", other.word_type()),
        }
    }

    #[test]
    fn vocative_context_forces_particle() {
        let factory = WordFactory::new();
        let tokens = ["ma", "tsmukan"];
        let context = ClassificationContext::new("ma", 0, &tokens);
        let word = factory.make_word_in_context(&context).unwrap();
        match word {
            Word::Particle(particle) => assert!(particle.is_vocative()),
            other => panic!("ma classified as {:?}", other.word_type()),
        }

        // Without a kinship follower the normal chain still reaches the
        // particle table.
        let tokens = ["ma", "utral"];
        let context = ClassificationContext::new("ma", 0, &tokens);
        let word = factory.make_word_in_context(&context).unwrap();
        assert!(matches!(word, Word::Particle(_)));
    }

    #[test]
    fn context_neighbor_lookup() {
        let tokens = ["oe", "taron", "srak"];
        let context = ClassificationContext::new("taron", 1, &tokens);
        assert_eq!(context.previous_token(), Some("oe"));
        assert_eq!(context.next_token(), Some("srak"));

        let context = ClassificationContext::new("oe", 0, &tokens);
        assert_eq!(context.previous_token(), None);

        let context = ClassificationContext::new("srak", 2, &tokens);
        assert_eq!(context.next_token(), None);
    }
}
