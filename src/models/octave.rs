//! Octave numbers, 0 to 9
//!
//! Octave 4 starts at middle C. "No octave" is `None` wherever an octave is
//! optional; stepping past either end gives `None`.

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::{KernelError, KernelResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Octave {
    Octave0 = 0,
    Octave1 = 1,
    Octave2 = 2,
    Octave3 = 3,
    Octave4 = 4,
    Octave5 = 5,
    Octave6 = 6,
    Octave7 = 7,
    Octave8 = 8,
    Octave9 = 9,
}

impl Octave {
    pub const ALL: [Octave; 10] = [
        Octave::Octave0,
        Octave::Octave1,
        Octave::Octave2,
        Octave::Octave3,
        Octave::Octave4,
        Octave::Octave5,
        Octave::Octave6,
        Octave::Octave7,
        Octave::Octave8,
        Octave::Octave9,
    ];

    /// The octave starting at middle C
    pub const REFERENCE: Octave = Octave::Octave4;

    /// Baseline for commas-and-quotes specs: the octave below the reference
    pub const COMMAS_AND_QUOTES_BASE: Octave = Octave::Octave3;

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: i32) -> Option<Octave> {
        usize::try_from(number)
            .ok()
            .and_then(|index| Octave::ALL.get(index).copied())
    }

    /// Parse a MusicXML `<octave>` value
    pub fn from_musicxml(number: i32) -> KernelResult<Octave> {
        Octave::from_number(number).ok_or(KernelError::OctaveOutOfRange(number))
    }

    /// Next octave up, `None` above octave 9
    pub fn successor(self) -> Option<Octave> {
        Octave::from_number(i32::from(self.number()) + 1)
    }

    /// Next octave down, `None` below octave 0
    pub fn predecessor(self) -> Option<Octave> {
        Octave::from_number(i32::from(self.number()) - 1)
    }

    /// Move by a signed number of octaves
    pub fn offset(self, octaves: i32) -> Option<Octave> {
        Octave::from_number(i32::from(self.number()) + octaves)
    }

    /// LilyPond absolute octave marks: c''' is octave 6, c' is octave 4,
    /// c is octave 3, c,, is octave 1
    pub fn as_commas_and_quotes(self) -> String {
        let base = Octave::COMMAS_AND_QUOTES_BASE.number();
        let number = self.number();
        if number >= base {
            "'".repeat((number - base) as usize)
        } else {
            ",".repeat((base - number) as usize)
        }
    }
}

/// Parse a string made only of `,` or only of `'`
///
/// Starts from octave 3, each comma goes down one octave and each quote up
/// one. Mixing the two, any other character, or leaving 0..=9 is an error.
pub fn octave_from_commas_and_quotes(spec: &str) -> KernelResult<Octave> {
    let base = i32::from(Octave::COMMAS_AND_QUOTES_BASE.number());
    let mut number = base;
    let mut seen: Option<char> = None;

    for c in spec.chars() {
        match (c, seen) {
            (',', None) | (',', Some(',')) => number -= 1,
            ('\'', None) | ('\'', Some('\'')) => number += 1,
            _ => return Err(KernelError::MalformedOctaveSpec(spec.to_string())),
        }
        seen = Some(c);
    }

    Octave::from_number(number).ok_or(KernelError::OctaveOutOfRange(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commas_and_quotes() {
        assert_eq!(octave_from_commas_and_quotes(""), Ok(Octave::Octave3));
        assert_eq!(octave_from_commas_and_quotes("'"), Ok(Octave::Octave4));
        assert_eq!(octave_from_commas_and_quotes("''"), Ok(Octave::Octave5));
        assert_eq!(octave_from_commas_and_quotes(",,,"), Ok(Octave::Octave0));
    }

    #[test]
    fn test_malformed_specs() {
        assert_eq!(
            octave_from_commas_and_quotes("',"),
            Err(KernelError::MalformedOctaveSpec("',".to_string()))
        );
        assert!(octave_from_commas_and_quotes(",'").is_err());
        assert!(octave_from_commas_and_quotes("'x").is_err());
        assert!(octave_from_commas_and_quotes(",,,,").is_err());
    }

    #[test]
    fn test_marks_roundtrip() {
        for octave in Octave::ALL {
            let marks = octave.as_commas_and_quotes();
            assert_eq!(octave_from_commas_and_quotes(&marks), Ok(octave));
        }
    }

    #[test]
    fn test_boundaries_saturate() {
        assert_eq!(Octave::Octave0.predecessor(), None);
        assert_eq!(Octave::Octave9.successor(), None);
        assert_eq!(Octave::Octave4.successor(), Some(Octave::Octave5));
    }

    #[test]
    fn test_from_musicxml() {
        assert_eq!(Octave::from_musicxml(4), Ok(Octave::Octave4));
        assert_eq!(Octave::from_musicxml(10), Err(KernelError::OctaveOutOfRange(10)));
        assert!(Octave::from_musicxml(-1).is_err());
    }
}
