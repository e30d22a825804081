//! Chromatic alteration of a diatonic letter
//!
//! MusicXML expresses alterations as a float in semitones (`<alter>`),
//! so ±0.5 is a quarter tone and ±3 a triple alteration. Internally we count
//! quarter tones to stay exact:
//!
//! ```
//! use notation_kernel::models::AlterationKind;
//!
//! assert_eq!(AlterationKind::from_musicxml_alter(-1.5).unwrap(), AlterationKind::SesquiFlat);
//! assert_eq!(AlterationKind::SemiSharp.quarter_tones(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{KernelError, KernelResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlterationKind {
    TripleFlat,
    DoubleFlat,
    SesquiFlat,
    Flat,
    SemiFlat,
    Natural,
    SemiSharp,
    Sharp,
    SesquiSharp,
    DoubleSharp,
    TripleSharp,
}

impl AlterationKind {
    pub const ALL: [AlterationKind; 11] = [
        AlterationKind::TripleFlat,
        AlterationKind::DoubleFlat,
        AlterationKind::SesquiFlat,
        AlterationKind::Flat,
        AlterationKind::SemiFlat,
        AlterationKind::Natural,
        AlterationKind::SemiSharp,
        AlterationKind::Sharp,
        AlterationKind::SesquiSharp,
        AlterationKind::DoubleSharp,
        AlterationKind::TripleSharp,
    ];

    /// Signed size of the alteration in quarter tones
    pub fn quarter_tones(self) -> i32 {
        match self {
            AlterationKind::TripleFlat => -6,
            AlterationKind::DoubleFlat => -4,
            AlterationKind::SesquiFlat => -3,
            AlterationKind::Flat => -2,
            AlterationKind::SemiFlat => -1,
            AlterationKind::Natural => 0,
            AlterationKind::SemiSharp => 1,
            AlterationKind::Sharp => 2,
            AlterationKind::SesquiSharp => 3,
            AlterationKind::DoubleSharp => 4,
            AlterationKind::TripleSharp => 6,
        }
    }

    /// Inverse of `quarter_tones`; ±5 has no name
    pub fn from_quarter_tones(quarter_tones: i32) -> Option<AlterationKind> {
        match quarter_tones {
            -6 => Some(AlterationKind::TripleFlat),
            -4 => Some(AlterationKind::DoubleFlat),
            -3 => Some(AlterationKind::SesquiFlat),
            -2 => Some(AlterationKind::Flat),
            -1 => Some(AlterationKind::SemiFlat),
            0 => Some(AlterationKind::Natural),
            1 => Some(AlterationKind::SemiSharp),
            2 => Some(AlterationKind::Sharp),
            3 => Some(AlterationKind::SesquiSharp),
            4 => Some(AlterationKind::DoubleSharp),
            6 => Some(AlterationKind::TripleSharp),
            _ => None,
        }
    }

    /// Parse a MusicXML `<alter>` value
    pub fn from_musicxml_alter(alter: f64) -> KernelResult<AlterationKind> {
        let doubled = alter * 2.0;
        if doubled.fract() != 0.0 || !doubled.is_finite() {
            return Err(KernelError::UnsupportedAlterationValue(alter));
        }
        AlterationKind::from_quarter_tones(doubled as i32)
            .ok_or(KernelError::UnsupportedAlterationValue(alter))
    }

    /// MusicXML `<alter>` value for this alteration
    pub fn as_musicxml_alter(self) -> f64 {
        f64::from(self.quarter_tones()) / 2.0
    }

    /// Drop the quarter-tone part, rounding toward natural
    ///
    /// Returns the alteration in whole semitones (-3..=3).
    pub fn semitones_rounded_toward_natural(self) -> i32 {
        self.quarter_tones() / 2
    }

    /// Quarter-tone alterations (semi- and sesqui-)
    pub fn is_quarter_tone(self) -> bool {
        self.quarter_tones() % 2 != 0
    }

    /// Double and triple alterations, which interval arithmetic rejects
    pub fn is_double_or_triple(self) -> bool {
        self.quarter_tones().abs() >= 4
    }

    /// Short ASCII symbol, used in diagnostics
    pub fn as_symbol(self) -> &'static str {
        match self {
            AlterationKind::TripleFlat => "bbb",
            AlterationKind::DoubleFlat => "bb",
            AlterationKind::SesquiFlat => "b-",
            AlterationKind::Flat => "b",
            AlterationKind::SemiFlat => "-",
            AlterationKind::Natural => "",
            AlterationKind::SemiSharp => "+",
            AlterationKind::Sharp => "#",
            AlterationKind::SesquiSharp => "#+",
            AlterationKind::DoubleSharp => "##",
            AlterationKind::TripleSharp => "###",
        }
    }

    pub fn as_string(self) -> &'static str {
        match self {
            AlterationKind::TripleFlat => "triple flat",
            AlterationKind::DoubleFlat => "double flat",
            AlterationKind::SesquiFlat => "sesqui flat",
            AlterationKind::Flat => "flat",
            AlterationKind::SemiFlat => "semi flat",
            AlterationKind::Natural => "natural",
            AlterationKind::SemiSharp => "semi sharp",
            AlterationKind::Sharp => "sharp",
            AlterationKind::SesquiSharp => "sesqui sharp",
            AlterationKind::DoubleSharp => "double sharp",
            AlterationKind::TripleSharp => "triple sharp",
        }
    }
}

impl Default for AlterationKind {
    fn default() -> Self {
        AlterationKind::Natural
    }
}
