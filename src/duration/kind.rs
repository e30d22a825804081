// Base duration kinds, from 1024th up to maxima

use serde::{Deserialize, Serialize};

use super::whole_notes::Rational;
use crate::errors::{KernelError, KernelResult};

/// Exponent of the longest supported duration (maxima = 8 whole notes)
pub const MAXIMA_EXPONENT: i32 = -3;

/// Exponent of the shortest supported duration (1/1024 whole note)
pub const SHORTEST_EXPONENT: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DurationKind {
    N1024th,
    N512th,
    N256th,
    N128th,
    N64th,
    N32nd,
    N16th,
    Eighth,
    Quarter,
    Half,
    Whole,
    Breve,
    Longa,
    Maxima,
}

impl DurationKind {
    pub const ALL: [DurationKind; 14] = [
        DurationKind::N1024th,
        DurationKind::N512th,
        DurationKind::N256th,
        DurationKind::N128th,
        DurationKind::N64th,
        DurationKind::N32nd,
        DurationKind::N16th,
        DurationKind::Eighth,
        DurationKind::Quarter,
        DurationKind::Half,
        DurationKind::Whole,
        DurationKind::Breve,
        DurationKind::Longa,
        DurationKind::Maxima,
    ];

    /// Binary logarithm of the denominator: whole=0, half=1, breve=-1
    pub fn exponent(self) -> i32 {
        SHORTEST_EXPONENT - self as i32
    }

    pub fn from_exponent(exponent: i32) -> Option<DurationKind> {
        if (MAXIMA_EXPONENT..=SHORTEST_EXPONENT).contains(&exponent) {
            Some(DurationKind::ALL[(SHORTEST_EXPONENT - exponent) as usize])
        } else {
            None
        }
    }

    /// Undotted value as a fraction of a whole note
    pub fn as_whole_notes(self) -> Rational {
        let exponent = self.exponent();
        if exponent >= 0 {
            Rational::new(1, 1 << exponent)
        } else {
            Rational::from_integer(1 << -exponent)
        }
    }

    /// Kind for a LilyPond/MusicXML duration integer (4 = quarter)
    pub fn from_duration_integer(value: u32) -> KernelResult<DurationKind> {
        if !value.is_power_of_two() {
            return Err(KernelError::UnsupportedDurationInteger(value));
        }
        DurationKind::from_exponent(value.trailing_zeros() as i32)
            .ok_or(KernelError::UnsupportedDurationInteger(value))
    }

    /// Parse a MusicXML `<type>` value
    pub fn from_musicxml_type(name: &str) -> KernelResult<DurationKind> {
        match name.trim() {
            "1024th" => Ok(DurationKind::N1024th),
            "512th" => Ok(DurationKind::N512th),
            "256th" => Ok(DurationKind::N256th),
            "128th" => Ok(DurationKind::N128th),
            "64th" => Ok(DurationKind::N64th),
            "32nd" => Ok(DurationKind::N32nd),
            "16th" => Ok(DurationKind::N16th),
            "eighth" => Ok(DurationKind::Eighth),
            "quarter" => Ok(DurationKind::Quarter),
            "half" => Ok(DurationKind::Half),
            "whole" => Ok(DurationKind::Whole),
            "breve" => Ok(DurationKind::Breve),
            "long" => Ok(DurationKind::Longa),
            "maxima" => Ok(DurationKind::Maxima),
            _ => Err(KernelError::UnsupportedDurationName(name.to_string())),
        }
    }

    pub fn as_musicxml_type(self) -> &'static str {
        match self {
            DurationKind::N1024th => "1024th",
            DurationKind::N512th => "512th",
            DurationKind::N256th => "256th",
            DurationKind::N128th => "128th",
            DurationKind::N64th => "64th",
            DurationKind::N32nd => "32nd",
            DurationKind::N16th => "16th",
            DurationKind::Eighth => "eighth",
            DurationKind::Quarter => "quarter",
            DurationKind::Half => "half",
            DurationKind::Whole => "whole",
            DurationKind::Breve => "breve",
            DurationKind::Longa => "long",
            DurationKind::Maxima => "maxima",
        }
    }

    /// LilyPond duration token without dots
    pub fn as_lilypond_token(self) -> String {
        match self {
            DurationKind::Breve => "\\breve".to_string(),
            DurationKind::Longa => "\\longa".to_string(),
            DurationKind::Maxima => "\\maxima".to_string(),
            _ => (1u32 << self.exponent()).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponents() {
        assert_eq!(DurationKind::Whole.exponent(), 0);
        assert_eq!(DurationKind::Quarter.exponent(), 2);
        assert_eq!(DurationKind::N1024th.exponent(), 10);
        assert_eq!(DurationKind::Maxima.exponent(), -3);
        for kind in DurationKind::ALL {
            assert_eq!(DurationKind::from_exponent(kind.exponent()), Some(kind));
        }
        assert_eq!(DurationKind::from_exponent(11), None);
        assert_eq!(DurationKind::from_exponent(-4), None);
    }

    #[test]
    fn test_as_whole_notes() {
        assert_eq!(DurationKind::Whole.as_whole_notes(), Rational::from_integer(1));
        assert_eq!(DurationKind::Half.as_whole_notes(), Rational::new(1, 2));
        assert_eq!(DurationKind::N32nd.as_whole_notes(), Rational::new(1, 32));
        assert_eq!(DurationKind::Longa.as_whole_notes(), Rational::from_integer(4));
        assert_eq!(DurationKind::Maxima.as_whole_notes(), Rational::from_integer(8));
    }

    #[test]
    fn test_from_duration_integer() {
        assert_eq!(DurationKind::from_duration_integer(4), Ok(DurationKind::Quarter));
        assert_eq!(DurationKind::from_duration_integer(1024), Ok(DurationKind::N1024th));
        assert_eq!(
            DurationKind::from_duration_integer(6),
            Err(KernelError::UnsupportedDurationInteger(6))
        );
        assert!(DurationKind::from_duration_integer(2048).is_err());
        assert!(DurationKind::from_duration_integer(0).is_err());
    }

    #[test]
    fn test_musicxml_names() {
        for kind in DurationKind::ALL {
            assert_eq!(DurationKind::from_musicxml_type(kind.as_musicxml_type()), Ok(kind));
        }
        assert!(DurationKind::from_musicxml_type("crotchet").is_err());
    }

    #[test]
    fn test_lilypond_tokens() {
        assert_eq!(DurationKind::Quarter.as_lilypond_token(), "4");
        assert_eq!(DurationKind::Whole.as_lilypond_token(), "1");
        assert_eq!(DurationKind::Breve.as_lilypond_token(), "\\breve");
        assert_eq!(DurationKind::N64th.as_lilypond_token(), "64");
    }
}
