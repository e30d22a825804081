//! Semitone pitch classes
//!
//! Same letter-major layout as `QuarterTonesPitchKind`, restricted to
//! alterations that are whole semitones.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AlterationKind, DiatonicPitchKind, Octave, QuarterTonesPitchKind};

pitch_kinds! {
    /// Pitch class without quarter-tone alterations
    pub enum SemiTonesPitchKind {
        // C family
        CTripleFlat => (C, TripleFlat),
        CDoubleFlat => (C, DoubleFlat),
        CFlat => (C, Flat),
        CNatural => (C, Natural),
        CSharp => (C, Sharp),
        CDoubleSharp => (C, DoubleSharp),
        CTripleSharp => (C, TripleSharp),

        // D family
        DTripleFlat => (D, TripleFlat),
        DDoubleFlat => (D, DoubleFlat),
        DFlat => (D, Flat),
        DNatural => (D, Natural),
        DSharp => (D, Sharp),
        DDoubleSharp => (D, DoubleSharp),
        DTripleSharp => (D, TripleSharp),

        // E family
        ETripleFlat => (E, TripleFlat),
        EDoubleFlat => (E, DoubleFlat),
        EFlat => (E, Flat),
        ENatural => (E, Natural),
        ESharp => (E, Sharp),
        EDoubleSharp => (E, DoubleSharp),
        ETripleSharp => (E, TripleSharp),

        // F family
        FTripleFlat => (F, TripleFlat),
        FDoubleFlat => (F, DoubleFlat),
        FFlat => (F, Flat),
        FNatural => (F, Natural),
        FSharp => (F, Sharp),
        FDoubleSharp => (F, DoubleSharp),
        FTripleSharp => (F, TripleSharp),

        // G family
        GTripleFlat => (G, TripleFlat),
        GDoubleFlat => (G, DoubleFlat),
        GFlat => (G, Flat),
        GNatural => (G, Natural),
        GSharp => (G, Sharp),
        GDoubleSharp => (G, DoubleSharp),
        GTripleSharp => (G, TripleSharp),

        // A family
        ATripleFlat => (A, TripleFlat),
        ADoubleFlat => (A, DoubleFlat),
        AFlat => (A, Flat),
        ANatural => (A, Natural),
        ASharp => (A, Sharp),
        ADoubleSharp => (A, DoubleSharp),
        ATripleSharp => (A, TripleSharp),

        // B family
        BTripleFlat => (B, TripleFlat),
        BDoubleFlat => (B, DoubleFlat),
        BFlat => (B, Flat),
        BNatural => (B, Natural),
        BSharp => (B, Sharp),
        BDoubleSharp => (B, DoubleSharp),
        BTripleSharp => (B, TripleSharp),
    }
}

impl SemiTonesPitchKind {
    /// Build from a letter, rounding quarter-tone alterations toward natural
    pub fn from_letter_and_semitone_alteration(
        letter: DiatonicPitchKind,
        alteration: AlterationKind,
    ) -> SemiTonesPitchKind {
        let column = (alteration.semitones_rounded_toward_natural() + 3) as usize;
        SemiTonesPitchKind::ALL[letter.index() * 7 + column]
    }

    /// Distance above the natural C of the same octave, in semitones
    pub fn semitones_above_c(self) -> i32 {
        self.letter().semitones_above_c() + self.alteration().semitones_rounded_toward_natural()
    }

    /// Same pitch with the quarter-tone encoding
    pub fn quarter_tones_pitch_kind(self) -> QuarterTonesPitchKind {
        QuarterTonesPitchKind::from(self)
    }
}

impl fmt::Display for SemiTonesPitchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter().as_char(), self.alteration().as_symbol())
    }
}

/// MIDI note number, with C4 (middle C) = 60
///
/// B#3 and C4 both give 60: the octave belongs to the letter, not to the
/// sounding pitch.
pub fn midi_note_number(pitch: SemiTonesPitchKind, octave: Octave) -> i32 {
    (i32::from(octave.number()) + 1) * 12 + pitch.semitones_above_c()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(SemiTonesPitchKind::ALL.len(), 49);
        for &pitch in SemiTonesPitchKind::ALL {
            assert_eq!(
                SemiTonesPitchKind::from_letter_and_semitone_alteration(
                    pitch.letter(),
                    pitch.alteration()
                ),
                pitch
            );
            assert!(!pitch.alteration().is_quarter_tone());
        }
    }

    #[test]
    fn test_semitones_above_c() {
        assert_eq!(SemiTonesPitchKind::CNatural.semitones_above_c(), 0);
        assert_eq!(SemiTonesPitchKind::CFlat.semitones_above_c(), -1);
        assert_eq!(SemiTonesPitchKind::FSharp.semitones_above_c(), 6);
        assert_eq!(SemiTonesPitchKind::BSharp.semitones_above_c(), 12);
    }

    #[test]
    fn test_midi_note_number() {
        assert_eq!(midi_note_number(SemiTonesPitchKind::CNatural, Octave::Octave4), 60);
        assert_eq!(midi_note_number(SemiTonesPitchKind::ANatural, Octave::Octave4), 69);
        assert_eq!(midi_note_number(SemiTonesPitchKind::BSharp, Octave::Octave3), 60);
        assert_eq!(midi_note_number(SemiTonesPitchKind::CNatural, Octave::Octave0), 12);
    }
}
