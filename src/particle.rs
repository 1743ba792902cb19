//! Structs for particles.

use crate::{
    term::{self, GrammaticalInfo, InvalidWordError, Term, WordType},
    util,
};
use std::borrow::Cow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleType {
    Question,
    Vocative,
    Conjunction,
    Conditional,
    Negative,
    Affirmative,
    Exclamative,
    General,
}

impl ParticleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticleType::Question => "question",
            ParticleType::Vocative => "vocative",
            ParticleType::Conjunction => "conjunction",
            ParticleType::Conditional => "conditional",
            ParticleType::Negative => "negative",
            ParticleType::Affirmative => "affirmative",
            ParticleType::Exclamative => "exclamative",
            ParticleType::General => "general",
        }
    }
}

/// A single particle.
#[derive(Clone, Debug)]
pub struct Particle<'a> {
    text: &'a str,
    position: usize,
    normalized: Cow<'a, str>,
    particle_type: ParticleType,
}

impl<'a> Particle<'a> {
    pub fn try_new(
        text: &'a str,
        position: usize,
        particle_type: ParticleType,
    ) -> Result<Self, InvalidWordError> {
        term::validate(text)?;
        Ok(Particle {
            text,
            position,
            normalized: util::normalize(text),
            particle_type,
        })
    }

    /// Combines the particle with surrounding context. Question particles
    /// lead, the vocative marker `ma` precedes what it addresses, and
    /// everything else trails its context.
    pub fn combined_with(&self, context: &str) -> String {
        match self.particle_type {
            ParticleType::Question => format!("{} {}", self.text, context),
            ParticleType::Vocative => format!("ma {}", context),
            _ => format!("{} {}", context, self.text),
        }
    }

    pub fn particle_type(&self) -> ParticleType {
        self.particle_type
    }

    pub fn is_question(&self) -> bool {
        self.particle_type == ParticleType::Question
    }

    pub fn is_vocative(&self) -> bool {
        self.particle_type == ParticleType::Vocative
    }
}

impl<'a> Term<'a> for Particle<'a> {
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
        WordType::Particle
    }

    fn grammatical_info(&self) -> GrammaticalInfo {
        let mut info = term::base_info(self);
        info.insert("particle_type", self.particle_type.as_str().into());
        info.insert("is_question_particle", self.is_question().into());
        info.insert("is_vocative", self.is_vocative().into());
        info
    }
}
