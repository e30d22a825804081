//! Interval stacks for each harmony kind
//!
//! The stacks are built once, on first use, into a registry indexed by
//! `HarmonyKind`. Inversions are new structures; the registry entries are
//! never modified.
//!
//! ```
//! use notation_kernel::harmonies::{structure_of, HarmonyKind};
//! use notation_kernel::intervals::IntervalKind;
//!
//! let dominant = structure_of(HarmonyKind::Dominant);
//! assert_eq!(
//!     dominant.interval_kinds(),
//!     vec![
//!         IntervalKind::PerfectUnison,
//!         IntervalKind::MajorThird,
//!         IntervalKind::PerfectFifth,
//!         IntervalKind::MinorSeventh,
//!     ]
//! );
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::kind::HarmonyKind;
use crate::errors::{KernelError, KernelResult};
use crate::intervals::{transpose, IntervalKind};
use crate::models::SemiTonesPitchKind;

/// An interval above the root, raised by whole octaves after inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HarmonyInterval {
    pub interval: IntervalKind,
    pub relative_octave: i32,
}

impl HarmonyInterval {
    pub fn new(interval: IntervalKind) -> Self {
        Self {
            interval,
            relative_octave: 0,
        }
    }

    /// Width above the root, octave raise included
    pub fn semitones(&self) -> i32 {
        self.interval.semitones() + 12 * self.relative_octave
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmonyStructure {
    pub kind: HarmonyKind,
    pub intervals: Vec<HarmonyInterval>,
}

static HARMONY_STRUCTURES: Lazy<Vec<HarmonyStructure>> = Lazy::new(|| {
    let structures: Vec<HarmonyStructure> = HarmonyKind::ALL
        .iter()
        .map(|&kind| HarmonyStructure {
            kind,
            intervals: interval_stack(kind)
                .iter()
                .map(|&interval| HarmonyInterval::new(interval))
                .collect(),
        })
        .collect();
    log::debug!("built {} harmony structures", structures.len());
    structures
});

/// Cached structure for `kind`
pub fn structure_of(kind: HarmonyKind) -> &'static HarmonyStructure {
    // the registry is built from ALL, in declaration order
    &HARMONY_STRUCTURES[kind as usize]
}

fn interval_stack(kind: HarmonyKind) -> &'static [IntervalKind] {
    use IntervalKind::*;

    match kind {
        HarmonyKind::Major => &[PerfectUnison, MajorThird, PerfectFifth],
        HarmonyKind::Minor => &[PerfectUnison, MinorThird, PerfectFifth],
        HarmonyKind::Augmented => &[PerfectUnison, MajorThird, AugmentedFifth],
        HarmonyKind::Diminished => &[PerfectUnison, MinorThird, DiminishedFifth],

        HarmonyKind::Dominant => &[PerfectUnison, MajorThird, PerfectFifth, MinorSeventh],
        HarmonyKind::MajorSeventh => &[PerfectUnison, MajorThird, PerfectFifth, MajorSeventh],
        HarmonyKind::MinorSeventh => &[PerfectUnison, MinorThird, PerfectFifth, MinorSeventh],
        HarmonyKind::DiminishedSeventh => {
            &[PerfectUnison, MinorThird, DiminishedFifth, DiminishedSeventh]
        }
        HarmonyKind::AugmentedSeventh => &[PerfectUnison, MajorThird, AugmentedFifth, MinorSeventh],
        HarmonyKind::HalfDiminished => &[PerfectUnison, MinorThird, DiminishedFifth, MinorSeventh],
        HarmonyKind::MajorMinor => &[PerfectUnison, MinorThird, PerfectFifth, MajorSeventh],

        HarmonyKind::MajorSixth => &[PerfectUnison, MajorThird, PerfectFifth, MajorSixth],
        HarmonyKind::MinorSixth => &[PerfectUnison, MinorThird, PerfectFifth, MajorSixth],

        HarmonyKind::DominantNinth => {
            &[PerfectUnison, MajorThird, PerfectFifth, MinorSeventh, MajorNinth]
        }
        HarmonyKind::MajorNinth => {
            &[PerfectUnison, MajorThird, PerfectFifth, MajorSeventh, MajorNinth]
        }
        HarmonyKind::MinorNinth => {
            &[PerfectUnison, MinorThird, PerfectFifth, MinorSeventh, MajorNinth]
        }

        HarmonyKind::DominantEleventh => &[
            PerfectUnison,
            MajorThird,
            PerfectFifth,
            MinorSeventh,
            MajorNinth,
            PerfectEleventh,
        ],
        HarmonyKind::MajorEleventh => &[
            PerfectUnison,
            MajorThird,
            PerfectFifth,
            MajorSeventh,
            MajorNinth,
            PerfectEleventh,
        ],
        HarmonyKind::MinorEleventh => &[
            PerfectUnison,
            MinorThird,
            PerfectFifth,
            MinorSeventh,
            MajorNinth,
            PerfectEleventh,
        ],

        HarmonyKind::DominantThirteenth => &[
            PerfectUnison,
            MajorThird,
            PerfectFifth,
            MinorSeventh,
            MajorNinth,
            PerfectEleventh,
            MajorThirteenth,
        ],
        HarmonyKind::MajorThirteenth => &[
            PerfectUnison,
            MajorThird,
            PerfectFifth,
            MajorSeventh,
            MajorNinth,
            PerfectEleventh,
            MajorThirteenth,
        ],
        HarmonyKind::MinorThirteenth => &[
            PerfectUnison,
            MinorThird,
            PerfectFifth,
            MinorSeventh,
            MajorNinth,
            PerfectEleventh,
            MajorThirteenth,
        ],

        HarmonyKind::SuspendedSecond => &[PerfectUnison, MajorSecond, PerfectFifth],
        HarmonyKind::SuspendedFourth => &[PerfectUnison, PerfectFourth, PerfectFifth],

        HarmonyKind::Neapolitan => &[PerfectUnison, MinorThird, MinorSixth],
        HarmonyKind::Italian => &[PerfectUnison, MajorThird, AugmentedSixth],
        HarmonyKind::French => &[PerfectUnison, MajorThird, AugmentedFourth, AugmentedSixth],
        HarmonyKind::German => &[PerfectUnison, MajorThird, PerfectFifth, AugmentedSixth],

        HarmonyKind::Pedal => &[PerfectUnison],
        HarmonyKind::Power => &[PerfectUnison, PerfectFifth],
        HarmonyKind::Tristan => &[PerfectUnison, AugmentedFourth, AugmentedSixth, AugmentedNinth],

        HarmonyKind::MinorMajorNinth => {
            &[PerfectUnison, MinorThird, PerfectFifth, MajorSeventh, MajorNinth]
        }
        HarmonyKind::DominantSuspendedFourth => {
            &[PerfectUnison, PerfectFourth, PerfectFifth, MinorSeventh]
        }
        HarmonyKind::DominantAugmentedFifth => {
            &[PerfectUnison, MajorThird, AugmentedFifth, MinorSeventh]
        }
        HarmonyKind::DominantMinorNinth => {
            &[PerfectUnison, MajorThird, PerfectFifth, MinorSeventh, MinorNinth]
        }
        HarmonyKind::DominantAugmentedNinthDiminishedFifth => {
            &[PerfectUnison, MajorThird, DiminishedFifth, MinorSeventh, AugmentedNinth]
        }
        HarmonyKind::DominantAugmentedNinthAugmentedFifth => {
            &[PerfectUnison, MajorThird, AugmentedFifth, MinorSeventh, AugmentedNinth]
        }
        HarmonyKind::DominantAugmentedEleventh => &[
            PerfectUnison,
            MajorThird,
            PerfectFifth,
            MinorSeventh,
            MajorNinth,
            AugmentedEleventh,
        ],
        HarmonyKind::MajorSeventhAugmentedEleventh => &[
            PerfectUnison,
            MajorThird,
            PerfectFifth,
            MajorSeventh,
            MajorNinth,
            AugmentedEleventh,
        ],
    }
}

impl HarmonyStructure {
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn interval_kinds(&self) -> Vec<IntervalKind> {
        self.intervals.iter().map(|entry| entry.interval).collect()
    }

    fn check_inversion(&self, inversion: usize) -> KernelResult<()> {
        if inversion >= self.len() {
            return Err(KernelError::InversionOutOfRange {
                inversion,
                harmony: self.kind.to_string(),
                len: self.len(),
            });
        }
        Ok(())
    }

    /// Move the first `inversion` intervals to the top, an octave higher
    ///
    /// Inversion 0 is the structure itself.
    pub fn inverted(&self, inversion: usize) -> KernelResult<HarmonyStructure> {
        self.check_inversion(inversion)?;

        let (lower, upper) = self.intervals.split_at(inversion);
        let intervals = upper
            .iter()
            .copied()
            .chain(lower.iter().map(|entry| HarmonyInterval {
                relative_octave: entry.relative_octave + 1,
                ..*entry
            }))
            .collect();

        Ok(HarmonyStructure {
            kind: self.kind,
            intervals,
        })
    }

    /// Interval sounding in the bass for `inversion`
    pub fn bass_interval_for_inversion(&self, inversion: usize) -> KernelResult<HarmonyInterval> {
        self.check_inversion(inversion)?;
        Ok(self.intervals[inversion])
    }
}

/// Chord tones of `kind` built on `root`, bottom up
pub fn build_semitone_chord(
    kind: HarmonyKind,
    root: SemiTonesPitchKind,
) -> KernelResult<Vec<SemiTonesPitchKind>> {
    let root = root.quarter_tones_pitch_kind();
    structure_of(kind)
        .intervals
        .iter()
        .map(|entry| transpose(root, entry.interval).map(|pitch| pitch.semitones_pitch_kind()))
        .collect()
}
