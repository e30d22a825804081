//! Pitch and alteration models
//!
//! A pitch has three interchangeable encodings:
//! - diatonic letter + alteration
//! - `QuarterTonesPitchKind` (keeps half-sharps and half-flats)
//! - `SemiTonesPitchKind` (collapses quarter-tone distinctions)
//!
//! Octaves are kept separately in `Octave`.

/// Generates a pitch enumeration whose variants are listed as
/// `Variant => (Letter, Alteration)` pairs, together with the lookups
/// between the enumerant and its letter/alteration parts.
macro_rules! pitch_kinds {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($letter:ident, $alteration:ident),)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant,)*
        }

        impl $name {
            /// Every enumerant, in rank order
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Diatonic letter of this pitch
            pub fn letter(self) -> DiatonicPitchKind {
                match self {
                    $($name::$variant => DiatonicPitchKind::$letter,)*
                }
            }

            /// Alteration applied to the letter
            pub fn alteration(self) -> AlterationKind {
                match self {
                    $($name::$variant => AlterationKind::$alteration,)*
                }
            }

            /// Fixed enumeration rank, used to order two pitches
            pub fn rank(self) -> usize {
                self as usize
            }

            #[allow(dead_code)]
            fn lookup(letter: DiatonicPitchKind, alteration: AlterationKind) -> Option<$name> {
                match (letter, alteration) {
                    $((DiatonicPitchKind::$letter, AlterationKind::$alteration) => Some($name::$variant),)*
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }
        }
    };
}

pub mod alteration;
pub mod diatonic_pitch;
pub mod octave;
pub mod pitch_language;
pub mod quarter_tones_pitch;
pub mod semitones_pitch;

// Re-export commonly used types
pub use alteration::AlterationKind;
pub use diatonic_pitch::DiatonicPitchKind;
pub use octave::{octave_from_commas_and_quotes, Octave};
pub use pitch_language::{
    pitch_and_octave_as_string, pitch_and_octave_from_string,
    quarter_tones_pitch_kind_as_string_in_language, quarter_tones_pitch_kind_from_string,
    PitchLanguage,
};
pub use quarter_tones_pitch::{
    quarter_tones_pitch_kind_from_diatonic_pitch_and_alteration, QuarterTonesPitchKind,
};
pub use semitones_pitch::{midi_note_number, SemiTonesPitchKind};
