// Diatonic letter names, C-based

use serde::{Deserialize, Serialize};

use crate::errors::{KernelError, KernelResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DiatonicPitchKind {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl DiatonicPitchKind {
    pub const ALL: [DiatonicPitchKind; 7] = [
        DiatonicPitchKind::C,
        DiatonicPitchKind::D,
        DiatonicPitchKind::E,
        DiatonicPitchKind::F,
        DiatonicPitchKind::G,
        DiatonicPitchKind::A,
        DiatonicPitchKind::B,
    ];

    /// Position in the C-based scale (C=0 ... B=6)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Letter at `index`, wrapping around the octave in both directions
    pub fn from_index(index: i32) -> DiatonicPitchKind {
        DiatonicPitchKind::ALL[index.rem_euclid(7) as usize]
    }

    /// Letter `steps` diatonic steps above (or below, if negative)
    pub fn offset(self, steps: i32) -> DiatonicPitchKind {
        DiatonicPitchKind::from_index(self.index() as i32 + steps)
    }

    /// Semitones of the natural letter above C
    pub fn semitones_above_c(self) -> i32 {
        match self {
            DiatonicPitchKind::C => 0,
            DiatonicPitchKind::D => 2,
            DiatonicPitchKind::E => 4,
            DiatonicPitchKind::F => 5,
            DiatonicPitchKind::G => 7,
            DiatonicPitchKind::A => 9,
            DiatonicPitchKind::B => 11,
        }
    }

    /// Parse a MusicXML `<step>` value ("A".."G", case-insensitive)
    pub fn from_musicxml_step(step: &str) -> KernelResult<DiatonicPitchKind> {
        match step.trim().to_ascii_uppercase().as_str() {
            "C" => Ok(DiatonicPitchKind::C),
            "D" => Ok(DiatonicPitchKind::D),
            "E" => Ok(DiatonicPitchKind::E),
            "F" => Ok(DiatonicPitchKind::F),
            "G" => Ok(DiatonicPitchKind::G),
            "A" => Ok(DiatonicPitchKind::A),
            "B" => Ok(DiatonicPitchKind::B),
            _ => Err(KernelError::UnknownDiatonicStep(step.to_string())),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            DiatonicPitchKind::C => 'C',
            DiatonicPitchKind::D => 'D',
            DiatonicPitchKind::E => 'E',
            DiatonicPitchKind::F => 'F',
            DiatonicPitchKind::G => 'G',
            DiatonicPitchKind::A => 'A',
            DiatonicPitchKind::B => 'B',
        }
    }
}
