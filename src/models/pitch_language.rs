//! Locale-spelled pitch names
//!
//! The names follow LilyPond's `\language` tables. They are built once, on
//! first use, into read-only maps shared by every translation job.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{octave_from_commas_and_quotes, AlterationKind, DiatonicPitchKind, Octave, QuarterTonesPitchKind};
use crate::errors::{KernelError, KernelResult};

/// Note naming language for engraving output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PitchLanguage {
    /// Dutch: c d e f g a b (cis/es for sharps/flats) - LilyPond default
    Nederlands,
    /// Catalan: do re mi fa sol la si (dod/dob)
    Catalan,
    /// German: c d e f g a h (cis/es, b for B flat)
    Deutsch,
    /// English: c d e f g a b (cs/cf)
    English,
    /// Spanish: do re mi fa sol la si (dos/dob)
    Espanol,
    /// French: do ré mi fa sol la si (dod/dob)
    Francais,
    /// Italian: do re mi fa sol la si (dod/dob)
    Italiano,
    /// Norwegian: c d e f g a h (ciss/cess)
    Norsk,
    /// Portuguese: do re mi fa sol la si (dos/dob)
    Portugues,
    /// Finnish: c d e f g a h (cis/ces)
    Suomi,
    /// Swedish: c d e f g a h (ciss/cess)
    Svenska,
    /// Flemish: do re mi fa sol la si (dok/dob)
    Vlaams,
}

impl PitchLanguage {
    pub const ALL: [PitchLanguage; 12] = [
        PitchLanguage::Nederlands,
        PitchLanguage::Catalan,
        PitchLanguage::Deutsch,
        PitchLanguage::English,
        PitchLanguage::Espanol,
        PitchLanguage::Francais,
        PitchLanguage::Italiano,
        PitchLanguage::Norsk,
        PitchLanguage::Portugues,
        PitchLanguage::Suomi,
        PitchLanguage::Svenska,
        PitchLanguage::Vlaams,
    ];

    /// Name used in LilyPond's `\language` directive
    pub fn as_str(self) -> &'static str {
        match self {
            PitchLanguage::Nederlands => "nederlands",
            PitchLanguage::Catalan => "catalan",
            PitchLanguage::Deutsch => "deutsch",
            PitchLanguage::English => "english",
            PitchLanguage::Espanol => "espanol",
            PitchLanguage::Francais => "francais",
            PitchLanguage::Italiano => "italiano",
            PitchLanguage::Norsk => "norsk",
            PitchLanguage::Portugues => "portugues",
            PitchLanguage::Suomi => "suomi",
            PitchLanguage::Svenska => "svenska",
            PitchLanguage::Vlaams => "vlaams",
        }
    }

    fn letter_names(self) -> [&'static str; 7] {
        match self {
            PitchLanguage::Nederlands | PitchLanguage::English => {
                ["c", "d", "e", "f", "g", "a", "b"]
            }
            PitchLanguage::Deutsch
            | PitchLanguage::Norsk
            | PitchLanguage::Suomi
            | PitchLanguage::Svenska => ["c", "d", "e", "f", "g", "a", "h"],
            PitchLanguage::Francais => ["do", "ré", "mi", "fa", "sol", "la", "si"],
            PitchLanguage::Catalan
            | PitchLanguage::Espanol
            | PitchLanguage::Italiano
            | PitchLanguage::Portugues
            | PitchLanguage::Vlaams => ["do", "re", "mi", "fa", "sol", "la", "si"],
        }
    }

    /// Suffixes indexed like `AlterationKind::ALL`
    fn alteration_suffixes(self) -> [&'static str; 11] {
        match self {
            PitchLanguage::Nederlands | PitchLanguage::Deutsch | PitchLanguage::Suomi => [
                "eseses", "eses", "eseh", "es", "eh", "", "ih", "is", "isih", "isis", "isisis",
            ],
            PitchLanguage::Norsk | PitchLanguage::Svenska => [
                "essessess", "essess", "esseh", "ess", "eh", "", "ih", "iss", "issih", "ississ",
                "issississ",
            ],
            PitchLanguage::English => [
                "fff", "ff", "tqf", "f", "qf", "", "qs", "s", "tqs", "ss", "sss",
            ],
            PitchLanguage::Italiano | PitchLanguage::Francais => [
                "bbb", "bb", "bsb", "b", "sb", "", "sd", "d", "dsd", "dd", "ddd",
            ],
            PitchLanguage::Catalan => [
                "bbb", "bb", "tqb", "b", "qb", "", "qd", "d", "tqd", "dd", "ddd",
            ],
            PitchLanguage::Espanol => [
                "bbb", "bb", "tcb", "b", "cb", "", "cs", "s", "tcs", "ss", "sss",
            ],
            PitchLanguage::Portugues => [
                "bbb", "bb", "btqt", "b", "bqt", "", "sqt", "s", "stqt", "ss", "sss",
            ],
            PitchLanguage::Vlaams => [
                "bbb", "bb", "hbb", "b", "hb", "", "hk", "k", "hkk", "kk", "kkk",
            ],
        }
    }

    fn spell(self, pitch: QuarterTonesPitchKind) -> String {
        let letter = pitch.letter();
        let alteration = pitch.alteration();
        let base = self.letter_names()[letter.index()];
        let suffix = self.alteration_suffixes()[alteration as usize];

        let german_family = matches!(
            self,
            PitchLanguage::Deutsch | PitchLanguage::Norsk | PitchLanguage::Suomi | PitchLanguage::Svenska
        );
        if german_family && letter == DiatonicPitchKind::B && alteration == AlterationKind::Flat {
            return "b".to_string();
        }

        // "ees" and "aes" contract to "es" and "as"
        if (base == "e" || base == "a") && suffix.starts_with("es") {
            return format!("{}{}", base, &suffix[1..]);
        }

        format!("{}{}", base, suffix)
    }
}

impl Default for PitchLanguage {
    fn default() -> Self {
        PitchLanguage::Nederlands
    }
}

impl fmt::Display for PitchLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PitchLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchLanguage::ALL
            .iter()
            .copied()
            .find(|language| language.as_str() == s)
            .ok_or_else(|| format!("unknown pitch language '{}'", s))
    }
}

static PITCH_NAMES: Lazy<HashMap<PitchLanguage, Vec<String>>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for language in PitchLanguage::ALL {
        let names = QuarterTonesPitchKind::ALL
            .iter()
            .map(|&pitch| language.spell(pitch))
            .collect();
        table.insert(language, names);
    }
    log::debug!("built pitch name tables for {} languages", table.len());
    table
});

static PITCHES_BY_NAME: Lazy<HashMap<(PitchLanguage, String), QuarterTonesPitchKind>> =
    Lazy::new(|| {
        let mut table = HashMap::new();
        for (&language, names) in PITCH_NAMES.iter() {
            for (name, &pitch) in names.iter().zip(QuarterTonesPitchKind::ALL) {
                table.entry((language, name.clone())).or_insert(pitch);
            }
        }
        table
    });

static PITCH_AND_OCTAVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^,']+)([,']*)$").expect("static pitch-and-octave pattern is valid")
});

/// Pitch name spelled in `language`, e.g. "cis" or "ré"
pub fn quarter_tones_pitch_kind_as_string_in_language(
    pitch: QuarterTonesPitchKind,
    language: PitchLanguage,
) -> String {
    PITCH_NAMES
        .get(&language)
        .and_then(|names| names.get(pitch.rank()))
        .cloned()
        .unwrap_or_else(|| language.spell(pitch))
}

/// Reverse lookup of `quarter_tones_pitch_kind_as_string_in_language`
pub fn quarter_tones_pitch_kind_from_string(
    language: PitchLanguage,
    name: &str,
) -> KernelResult<QuarterTonesPitchKind> {
    PITCHES_BY_NAME
        .get(&(language, name.to_string()))
        .copied()
        .ok_or_else(|| KernelError::UnknownPitchName {
            name: name.to_string(),
            language: language.to_string(),
        })
}

/// Parse a pitch name followed by octave marks, e.g. "cis''" or "bes,"
pub fn pitch_and_octave_from_string(
    language: PitchLanguage,
    spec: &str,
) -> KernelResult<(QuarterTonesPitchKind, Octave)> {
    let captures = PITCH_AND_OCTAVE
        .captures(spec.trim())
        .ok_or_else(|| KernelError::MalformedPitchString(spec.to_string()))?;

    let name = captures.get(1).map_or("", |m| m.as_str());
    let marks = captures.get(2).map_or("", |m| m.as_str());

    let pitch = quarter_tones_pitch_kind_from_string(language, name)?;
    let octave = octave_from_commas_and_quotes(marks)?;
    Ok((pitch, octave))
}

/// Pitch name plus LilyPond octave marks
pub fn pitch_and_octave_as_string(
    language: PitchLanguage,
    pitch: QuarterTonesPitchKind,
    octave: Octave,
) -> String {
    format!(
        "{}{}",
        quarter_tones_pitch_kind_as_string_in_language(pitch, language),
        octave.as_commas_and_quotes()
    )
}
