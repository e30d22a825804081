//! Quarter-tone pitch classes
//!
//! Every (letter, alteration) pair has its own enumerant, so half-sharps and
//! half-flats are kept. Enumeration order is letter first (C..B), then
//! alteration from triple flat to triple sharp; `rank()` exposes it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AlterationKind, DiatonicPitchKind, SemiTonesPitchKind};
use crate::errors::{KernelError, KernelResult};

pitch_kinds! {
    /// Pitch class including quarter-tone alterations
    pub enum QuarterTonesPitchKind {
        // C family
        CTripleFlat => (C, TripleFlat),
        CDoubleFlat => (C, DoubleFlat),
        CSesquiFlat => (C, SesquiFlat),
        CFlat => (C, Flat),
        CSemiFlat => (C, SemiFlat),
        CNatural => (C, Natural),
        CSemiSharp => (C, SemiSharp),
        CSharp => (C, Sharp),
        CSesquiSharp => (C, SesquiSharp),
        CDoubleSharp => (C, DoubleSharp),
        CTripleSharp => (C, TripleSharp),

        // D family
        DTripleFlat => (D, TripleFlat),
        DDoubleFlat => (D, DoubleFlat),
        DSesquiFlat => (D, SesquiFlat),
        DFlat => (D, Flat),
        DSemiFlat => (D, SemiFlat),
        DNatural => (D, Natural),
        DSemiSharp => (D, SemiSharp),
        DSharp => (D, Sharp),
        DSesquiSharp => (D, SesquiSharp),
        DDoubleSharp => (D, DoubleSharp),
        DTripleSharp => (D, TripleSharp),

        // E family
        ETripleFlat => (E, TripleFlat),
        EDoubleFlat => (E, DoubleFlat),
        ESesquiFlat => (E, SesquiFlat),
        EFlat => (E, Flat),
        ESemiFlat => (E, SemiFlat),
        ENatural => (E, Natural),
        ESemiSharp => (E, SemiSharp),
        ESharp => (E, Sharp),
        ESesquiSharp => (E, SesquiSharp),
        EDoubleSharp => (E, DoubleSharp),
        ETripleSharp => (E, TripleSharp),

        // F family
        FTripleFlat => (F, TripleFlat),
        FDoubleFlat => (F, DoubleFlat),
        FSesquiFlat => (F, SesquiFlat),
        FFlat => (F, Flat),
        FSemiFlat => (F, SemiFlat),
        FNatural => (F, Natural),
        FSemiSharp => (F, SemiSharp),
        FSharp => (F, Sharp),
        FSesquiSharp => (F, SesquiSharp),
        FDoubleSharp => (F, DoubleSharp),
        FTripleSharp => (F, TripleSharp),

        // G family
        GTripleFlat => (G, TripleFlat),
        GDoubleFlat => (G, DoubleFlat),
        GSesquiFlat => (G, SesquiFlat),
        GFlat => (G, Flat),
        GSemiFlat => (G, SemiFlat),
        GNatural => (G, Natural),
        GSemiSharp => (G, SemiSharp),
        GSharp => (G, Sharp),
        GSesquiSharp => (G, SesquiSharp),
        GDoubleSharp => (G, DoubleSharp),
        GTripleSharp => (G, TripleSharp),

        // A family
        ATripleFlat => (A, TripleFlat),
        ADoubleFlat => (A, DoubleFlat),
        ASesquiFlat => (A, SesquiFlat),
        AFlat => (A, Flat),
        ASemiFlat => (A, SemiFlat),
        ANatural => (A, Natural),
        ASemiSharp => (A, SemiSharp),
        ASharp => (A, Sharp),
        ASesquiSharp => (A, SesquiSharp),
        ADoubleSharp => (A, DoubleSharp),
        ATripleSharp => (A, TripleSharp),

        // B family
        BTripleFlat => (B, TripleFlat),
        BDoubleFlat => (B, DoubleFlat),
        BSesquiFlat => (B, SesquiFlat),
        BFlat => (B, Flat),
        BSemiFlat => (B, SemiFlat),
        BNatural => (B, Natural),
        BSemiSharp => (B, SemiSharp),
        BSharp => (B, Sharp),
        BSesquiSharp => (B, SesquiSharp),
        BDoubleSharp => (B, DoubleSharp),
        BTripleSharp => (B, TripleSharp),
    }
}

/// Build the pitch for a parsed step + alter pair
///
/// Fails only when the alteration was never set.
pub fn quarter_tones_pitch_kind_from_diatonic_pitch_and_alteration(
    letter: DiatonicPitchKind,
    alteration: Option<AlterationKind>,
) -> KernelResult<QuarterTonesPitchKind> {
    let alteration = alteration.ok_or(KernelError::InvalidAlteration)?;
    QuarterTonesPitchKind::from_parts(letter, alteration)
}

impl QuarterTonesPitchKind {
    pub fn from_parts(
        letter: DiatonicPitchKind,
        alteration: AlterationKind,
    ) -> KernelResult<QuarterTonesPitchKind> {
        QuarterTonesPitchKind::lookup(letter, alteration).ok_or_else(|| {
            KernelError::InternalInconsistency(format!(
                "no quarter-tones pitch for {:?} {:?}",
                letter, alteration
            ))
        })
    }

    pub fn natural(letter: DiatonicPitchKind) -> QuarterTonesPitchKind {
        match letter {
            DiatonicPitchKind::C => QuarterTonesPitchKind::CNatural,
            DiatonicPitchKind::D => QuarterTonesPitchKind::DNatural,
            DiatonicPitchKind::E => QuarterTonesPitchKind::ENatural,
            DiatonicPitchKind::F => QuarterTonesPitchKind::FNatural,
            DiatonicPitchKind::G => QuarterTonesPitchKind::GNatural,
            DiatonicPitchKind::A => QuarterTonesPitchKind::ANatural,
            DiatonicPitchKind::B => QuarterTonesPitchKind::BNatural,
        }
    }

    /// Distance above the natural C of the same octave, in quarter tones
    ///
    /// Can be negative (C flat) or reach past the octave (B sharp).
    pub fn quarter_tones_above_c(self) -> i32 {
        2 * self.letter().semitones_above_c() + self.alteration().quarter_tones()
    }

    /// Lossy projection onto semitones; quarter tones round toward natural
    pub fn semitones_pitch_kind(self) -> SemiTonesPitchKind {
        let alteration = match self.alteration().semitones_rounded_toward_natural() {
            -3 => AlterationKind::TripleFlat,
            -2 => AlterationKind::DoubleFlat,
            -1 => AlterationKind::Flat,
            0 => AlterationKind::Natural,
            1 => AlterationKind::Sharp,
            2 => AlterationKind::DoubleSharp,
            _ => AlterationKind::TripleSharp,
        };
        SemiTonesPitchKind::from_letter_and_semitone_alteration(self.letter(), alteration)
    }

    /// Same letter, different alteration
    pub fn with_alteration(self, alteration: AlterationKind) -> KernelResult<QuarterTonesPitchKind> {
        QuarterTonesPitchKind::from_parts(self.letter(), alteration)
    }
}

impl From<SemiTonesPitchKind> for QuarterTonesPitchKind {
    fn from(pitch: SemiTonesPitchKind) -> Self {
        // ALL is letter-major and covers every (letter, alteration) pair
        let index = pitch.letter().index() * AlterationKind::ALL.len() + pitch.alteration() as usize;
        QuarterTonesPitchKind::ALL[index]
    }
}

impl fmt::Display for QuarterTonesPitchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter().as_char(), self.alteration().as_symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pair_has_an_enumerant() {
        assert_eq!(QuarterTonesPitchKind::ALL.len(), 77);
        for letter in DiatonicPitchKind::ALL {
            for alteration in AlterationKind::ALL {
                let pitch = QuarterTonesPitchKind::from_parts(letter, alteration).unwrap();
                assert_eq!(pitch.letter(), letter);
                assert_eq!(pitch.alteration(), alteration);
            }
        }
    }

    #[test]
    fn test_unset_alteration_is_rejected() {
        assert_eq!(
            quarter_tones_pitch_kind_from_diatonic_pitch_and_alteration(DiatonicPitchKind::C, None),
            Err(KernelError::InvalidAlteration)
        );
        assert_eq!(
            quarter_tones_pitch_kind_from_diatonic_pitch_and_alteration(
                DiatonicPitchKind::E,
                Some(AlterationKind::SemiFlat)
            ),
            Ok(QuarterTonesPitchKind::ESemiFlat)
        );
    }

    #[test]
    fn test_rank_orders_by_letter_then_alteration() {
        assert!(QuarterTonesPitchKind::CSharp.rank() < QuarterTonesPitchKind::DFlat.rank());
        assert!(QuarterTonesPitchKind::BFlat.rank() < QuarterTonesPitchKind::BNatural.rank());
        assert!(QuarterTonesPitchKind::CTripleSharp < QuarterTonesPitchKind::DTripleFlat);
    }

    #[test]
    fn test_quarter_tones_above_c() {
        assert_eq!(QuarterTonesPitchKind::CNatural.quarter_tones_above_c(), 0);
        assert_eq!(QuarterTonesPitchKind::CFlat.quarter_tones_above_c(), -2);
        assert_eq!(QuarterTonesPitchKind::ESemiFlat.quarter_tones_above_c(), 7);
        assert_eq!(QuarterTonesPitchKind::BSharp.quarter_tones_above_c(), 24);
    }

    #[test]
    fn test_semitones_projection() {
        assert_eq!(
            QuarterTonesPitchKind::CSemiSharp.semitones_pitch_kind(),
            SemiTonesPitchKind::CNatural
        );
        assert_eq!(
            QuarterTonesPitchKind::DSesquiFlat.semitones_pitch_kind(),
            SemiTonesPitchKind::DFlat
        );
        assert_eq!(
            QuarterTonesPitchKind::FTripleSharp.semitones_pitch_kind(),
            SemiTonesPitchKind::FTripleSharp
        );
    }

    #[test]
    fn test_from_semitones_is_lossless() {
        for &pitch in SemiTonesPitchKind::ALL {
            let quarter_tones = QuarterTonesPitchKind::from(pitch);
            assert_eq!(quarter_tones.letter(), pitch.letter());
            assert_eq!(quarter_tones.alteration(), pitch.alteration());
            assert_eq!(quarter_tones.semitones_pitch_kind(), pitch);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(QuarterTonesPitchKind::FSharp.to_string(), "F#");
        assert_eq!(QuarterTonesPitchKind::BDoubleFlat.to_string(), "Bbb");
        assert_eq!(QuarterTonesPitchKind::GNatural.to_string(), "G");
    }
}
