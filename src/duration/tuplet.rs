// Tuplet factors: `actual` notes in the time of `normal` notes

use std::fmt;

use serde::{Deserialize, Serialize};

use super::whole_notes::Rational;
use crate::errors::{KernelError, KernelResult};

/// E.g. a triplet is 3 actual notes in the time of 2 normal ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TupletFactor {
    pub actual: i32,
    pub normal: i32,
}

impl TupletFactor {
    pub fn new(actual: i32, normal: i32) -> KernelResult<Self> {
        if actual <= 0 || normal <= 0 {
            return Err(KernelError::InvalidTupletFactor { actual, normal });
        }
        Ok(Self { actual, normal })
    }

    /// Factor with the given scaling ratio (normal/actual)
    pub fn from_ratio(ratio: Rational) -> KernelResult<Self> {
        TupletFactor::new(*ratio.denom(), *ratio.numer())
    }

    /// Multiplier applied to each note: normal/actual, e.g. 2/3 for a triplet
    pub fn as_ratio(&self) -> Rational {
        Rational::new(self.normal, self.actual)
    }

    pub fn apply(&self, whole_notes: Rational) -> Rational {
        whole_notes * self.as_ratio()
    }

    pub fn inverted(&self) -> Self {
        Self {
            actual: self.normal,
            normal: self.actual,
        }
    }

    /// 1:1 factors, and equivalent ones like 2:2, don't change anything
    pub fn is_trivial(&self) -> bool {
        self.actual == self.normal
    }

    /// Same scaling with the smallest numbers
    pub fn reduced(&self) -> Self {
        let ratio = self.as_ratio();
        Self {
            actual: *ratio.denom(),
            normal: *ratio.numer(),
        }
    }
}

impl Default for TupletFactor {
    fn default() -> Self {
        Self { actual: 1, normal: 1 }
    }
}

/// LilyPond `\tuplet` fraction, e.g. "3/2"
impl fmt::Display for TupletFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.actual, self.normal)
    }
}
