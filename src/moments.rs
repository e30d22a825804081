//! Time positions used to align voices inside a measure
//!
//! A moment is a written position plus a sounding offset relative to it
//! (grace notes sound before their written position). Moments compare
//! lexicographically: written position first, then sounding offset.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::duration::Rational;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Moment {
    pub written_position: Rational,
    pub sounding_relative_offset: Rational,
}

impl Moment {
    /// Sentinel for a moment that was never set
    pub const UNDEFINED: Moment = Moment {
        written_position: Rational::new_raw(-1, 1),
        sounding_relative_offset: Rational::new_raw(-1, 1),
    };

    pub fn new(written_position: Rational, sounding_relative_offset: Rational) -> Self {
        Self {
            written_position,
            sounding_relative_offset,
        }
    }

    /// Moment on the written position itself
    pub fn at(written_position: Rational) -> Self {
        Self::new(written_position, Rational::from_integer(0))
    }

    pub fn is_defined(&self) -> bool {
        *self != Moment::UNDEFINED
    }
}

impl Default for Moment {
    fn default() -> Self {
        Moment::UNDEFINED
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}/{}, {}/{}]",
            self.written_position.numer(),
            self.written_position.denom(),
            self.sounding_relative_offset.numer(),
            self.sounding_relative_offset.denom()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_written_position_first() {
        let early = Moment::new(Rational::new(1, 4), Rational::from_integer(0));
        let late_grace = Moment::new(Rational::new(1, 2), Rational::new(-1, 16));
        assert!(early < late_grace);
    }

    #[test]
    fn test_sounding_offset_breaks_ties() {
        let grace = Moment::new(Rational::new(1, 2), Rational::new(-1, 16));
        let main = Moment::at(Rational::new(1, 2));
        assert!(grace < main);
        assert_ne!(grace, main);
    }

    #[test]
    fn test_equality_is_on_reduced_values() {
        assert_eq!(
            Moment::at(Rational::new(2, 4)),
            Moment::at(Rational::new(1, 2))
        );
    }

    #[test]
    fn test_undefined() {
        assert!(!Moment::UNDEFINED.is_defined());
        assert!(!Moment::default().is_defined());
        assert!(Moment::at(Rational::from_integer(0)).is_defined());
        assert!(Moment::UNDEFINED < Moment::at(Rational::from_integer(0)));
    }

    #[test]
    fn test_display() {
        let moment = Moment::new(Rational::new(3, 4), Rational::new(-1, 8));
        assert_eq!(moment.to_string(), "[3/4, -1/8]");
        assert_eq!(Moment::at(Rational::from_integer(1)).to_string(), "[1/1, 0/1]");
    }
}
