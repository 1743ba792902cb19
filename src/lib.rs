#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Classify and inflect Na'vi words.
//!
//! This crate models the morphology of Na'vi, the constructed language of
//! the film Avatar, as documented by the fan-maintained grammars. It does
//! two things: it classifies raw word tokens into grammatical categories
//! (noun, pronoun, verb, adjective, numeral, particle, prenoun), and it
//! derives inflected surface forms from the classified words — case and
//! number marking on nouns and pronouns, infix insertion on verbs,
//! attributive and comparative forms of adjectives, and the derived forms of
//! the octal numerals.
//!
//! The rules are almost entirely table-driven: each classifier owns a closed
//! lookup table, and the phonology-conditioned endings are selected once
//! when a word is constructed. Tokenization is out of scope; the crate
//! expects tokens that have already been split on whitespace and
//! punctuation, handed over one at a time with an optional view of their
//! neighbors. So is syntax: nothing here checks agreement between words.
//!
//! # Examples
//!
//! Classify a token and decline it:
//!
//! ```
//! use navi_morph::declension::Declinable;
//! use navi_morph::factory::WordFactory;
//! use navi_morph::grammar::Case;
//! use navi_morph::word::Word;
//!
//! let factory = WordFactory::new();
//! let word = factory.make_word("kelku", 0).unwrap();
//! if let Word::Noun(noun) = word {
//!     assert_eq!(noun.declined(Case::Dative), "kelkuru");
//! }
//! ```
//!
//! Inflect a verb:
//!
//! ```
//! use navi_morph::verb::{Verb, Voice};
//!
//! let mut verb = Verb::try_new("taron", 0).unwrap();
//! assert_eq!(verb.participle(Voice::Active), "tusaron");
//! ```
//!
//! Classification never fails for a word made of orthographic characters:
//! anything no table recognizes defaults to a singular subjective noun.

mod util;

pub mod adjective;
pub mod declension;
pub mod factory;
pub mod grammar;
pub mod noun;
pub mod numeral;
pub mod particle;
pub mod phonology;
pub mod prenoun;
pub mod pronoun;
pub mod term;
pub mod verb;
pub mod word;
