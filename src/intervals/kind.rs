//! Named intervals from the diminished unison to the augmented fourteenth
//!
//! An interval is a pair of a diatonic number (0-based count of letter
//! steps) and a quality. Its width in semitones follows from both.

use std::fmt;

use serde::{Deserialize, Serialize};

const SIMPLE_SEMITONES: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

const NUMBER_NAMES: [&str; 14] = [
    "unison",
    "second",
    "third",
    "fourth",
    "fifth",
    "sixth",
    "seventh",
    "octave",
    "ninth",
    "tenth",
    "eleventh",
    "twelfth",
    "thirteenth",
    "fourteenth",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalQuality {
    Diminished,
    Minor,
    Perfect,
    Major,
    Augmented,
}

impl IntervalQuality {
    /// Quality of the inverted interval
    pub fn inverted(self) -> IntervalQuality {
        match self {
            IntervalQuality::Diminished => IntervalQuality::Augmented,
            IntervalQuality::Minor => IntervalQuality::Major,
            IntervalQuality::Perfect => IntervalQuality::Perfect,
            IntervalQuality::Major => IntervalQuality::Minor,
            IntervalQuality::Augmented => IntervalQuality::Diminished,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IntervalQuality::Diminished => "diminished",
            IntervalQuality::Minor => "minor",
            IntervalQuality::Perfect => "perfect",
            IntervalQuality::Major => "major",
            IntervalQuality::Augmented => "augmented",
        }
    }

    pub fn as_short_str(self) -> &'static str {
        match self {
            IntervalQuality::Diminished => "d",
            IntervalQuality::Minor => "m",
            IntervalQuality::Perfect => "P",
            IntervalQuality::Major => "M",
            IntervalQuality::Augmented => "A",
        }
    }
}

/// Unisons, fourths, fifths and their compounds take perfect qualities,
/// the other numbers take minor/major ones
pub fn is_perfect_number(number: i32) -> bool {
    matches!(number.rem_euclid(7), 0 | 3 | 4)
}

/// Width offset of `quality` relative to the perfect or major interval
fn quality_offset(number: i32, quality: IntervalQuality) -> Option<i32> {
    match (is_perfect_number(number), quality) {
        (true, IntervalQuality::Diminished) => Some(-1),
        (true, IntervalQuality::Perfect) => Some(0),
        (true, IntervalQuality::Augmented) => Some(1),
        (false, IntervalQuality::Diminished) => Some(-2),
        (false, IntervalQuality::Minor) => Some(-1),
        (false, IntervalQuality::Major) => Some(0),
        (false, IntervalQuality::Augmented) => Some(1),
        _ => None,
    }
}

fn quality_from_offset(number: i32, offset: i32) -> Option<IntervalQuality> {
    match (is_perfect_number(number), offset) {
        (true, -1) => Some(IntervalQuality::Diminished),
        (true, 0) => Some(IntervalQuality::Perfect),
        (true, 1) => Some(IntervalQuality::Augmented),
        (false, -2) => Some(IntervalQuality::Diminished),
        (false, -1) => Some(IntervalQuality::Minor),
        (false, 0) => Some(IntervalQuality::Major),
        (false, 1) => Some(IntervalQuality::Augmented),
        _ => None,
    }
}

/// Width of the perfect or major interval spanning `number` steps
fn base_semitones(number: i32) -> i32 {
    SIMPLE_SEMITONES[number.rem_euclid(7) as usize] + 12 * number.div_euclid(7)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IntervalKind {
    DiminishedUnison,
    PerfectUnison,
    AugmentedUnison,
    DiminishedSecond,
    MinorSecond,
    MajorSecond,
    AugmentedSecond,
    DiminishedThird,
    MinorThird,
    MajorThird,
    AugmentedThird,
    DiminishedFourth,
    PerfectFourth,
    AugmentedFourth,
    DiminishedFifth,
    PerfectFifth,
    AugmentedFifth,
    DiminishedSixth,
    MinorSixth,
    MajorSixth,
    AugmentedSixth,
    DiminishedSeventh,
    MinorSeventh,
    MajorSeventh,
    AugmentedSeventh,
    DiminishedOctave,
    PerfectOctave,
    AugmentedOctave,
    DiminishedNinth,
    MinorNinth,
    MajorNinth,
    AugmentedNinth,
    DiminishedTenth,
    MinorTenth,
    MajorTenth,
    AugmentedTenth,
    DiminishedEleventh,
    PerfectEleventh,
    AugmentedEleventh,
    DiminishedTwelfth,
    PerfectTwelfth,
    AugmentedTwelfth,
    DiminishedThirteenth,
    MinorThirteenth,
    MajorThirteenth,
    AugmentedThirteenth,
    DiminishedFourteenth,
    MinorFourteenth,
    MajorFourteenth,
    AugmentedFourteenth,
}

impl IntervalKind {
    /// Every interval, by increasing number then quality
    pub const ALL: [IntervalKind; 50] = [
        IntervalKind::DiminishedUnison,
        IntervalKind::PerfectUnison,
        IntervalKind::AugmentedUnison,
        IntervalKind::DiminishedSecond,
        IntervalKind::MinorSecond,
        IntervalKind::MajorSecond,
        IntervalKind::AugmentedSecond,
        IntervalKind::DiminishedThird,
        IntervalKind::MinorThird,
        IntervalKind::MajorThird,
        IntervalKind::AugmentedThird,
        IntervalKind::DiminishedFourth,
        IntervalKind::PerfectFourth,
        IntervalKind::AugmentedFourth,
        IntervalKind::DiminishedFifth,
        IntervalKind::PerfectFifth,
        IntervalKind::AugmentedFifth,
        IntervalKind::DiminishedSixth,
        IntervalKind::MinorSixth,
        IntervalKind::MajorSixth,
        IntervalKind::AugmentedSixth,
        IntervalKind::DiminishedSeventh,
        IntervalKind::MinorSeventh,
        IntervalKind::MajorSeventh,
        IntervalKind::AugmentedSeventh,
        IntervalKind::DiminishedOctave,
        IntervalKind::PerfectOctave,
        IntervalKind::AugmentedOctave,
        IntervalKind::DiminishedNinth,
        IntervalKind::MinorNinth,
        IntervalKind::MajorNinth,
        IntervalKind::AugmentedNinth,
        IntervalKind::DiminishedTenth,
        IntervalKind::MinorTenth,
        IntervalKind::MajorTenth,
        IntervalKind::AugmentedTenth,
        IntervalKind::DiminishedEleventh,
        IntervalKind::PerfectEleventh,
        IntervalKind::AugmentedEleventh,
        IntervalKind::DiminishedTwelfth,
        IntervalKind::PerfectTwelfth,
        IntervalKind::AugmentedTwelfth,
        IntervalKind::DiminishedThirteenth,
        IntervalKind::MinorThirteenth,
        IntervalKind::MajorThirteenth,
        IntervalKind::AugmentedThirteenth,
        IntervalKind::DiminishedFourteenth,
        IntervalKind::MinorFourteenth,
        IntervalKind::MajorFourteenth,
        IntervalKind::AugmentedFourteenth,
    ];

    /// Number of simple intervals at the front of `ALL` (unison to seventh)
    pub const SIMPLE_COUNT: usize = 25;

    fn parts(self) -> (i32, IntervalQuality) {
        match self {
            IntervalKind::DiminishedUnison => (0, IntervalQuality::Diminished),
            IntervalKind::PerfectUnison => (0, IntervalQuality::Perfect),
            IntervalKind::AugmentedUnison => (0, IntervalQuality::Augmented),
            IntervalKind::DiminishedSecond => (1, IntervalQuality::Diminished),
            IntervalKind::MinorSecond => (1, IntervalQuality::Minor),
            IntervalKind::MajorSecond => (1, IntervalQuality::Major),
            IntervalKind::AugmentedSecond => (1, IntervalQuality::Augmented),
            IntervalKind::DiminishedThird => (2, IntervalQuality::Diminished),
            IntervalKind::MinorThird => (2, IntervalQuality::Minor),
            IntervalKind::MajorThird => (2, IntervalQuality::Major),
            IntervalKind::AugmentedThird => (2, IntervalQuality::Augmented),
            IntervalKind::DiminishedFourth => (3, IntervalQuality::Diminished),
            IntervalKind::PerfectFourth => (3, IntervalQuality::Perfect),
            IntervalKind::AugmentedFourth => (3, IntervalQuality::Augmented),
            IntervalKind::DiminishedFifth => (4, IntervalQuality::Diminished),
            IntervalKind::PerfectFifth => (4, IntervalQuality::Perfect),
            IntervalKind::AugmentedFifth => (4, IntervalQuality::Augmented),
            IntervalKind::DiminishedSixth => (5, IntervalQuality::Diminished),
            IntervalKind::MinorSixth => (5, IntervalQuality::Minor),
            IntervalKind::MajorSixth => (5, IntervalQuality::Major),
            IntervalKind::AugmentedSixth => (5, IntervalQuality::Augmented),
            IntervalKind::DiminishedSeventh => (6, IntervalQuality::Diminished),
            IntervalKind::MinorSeventh => (6, IntervalQuality::Minor),
            IntervalKind::MajorSeventh => (6, IntervalQuality::Major),
            IntervalKind::AugmentedSeventh => (6, IntervalQuality::Augmented),
            IntervalKind::DiminishedOctave => (7, IntervalQuality::Diminished),
            IntervalKind::PerfectOctave => (7, IntervalQuality::Perfect),
            IntervalKind::AugmentedOctave => (7, IntervalQuality::Augmented),
            IntervalKind::DiminishedNinth => (8, IntervalQuality::Diminished),
            IntervalKind::MinorNinth => (8, IntervalQuality::Minor),
            IntervalKind::MajorNinth => (8, IntervalQuality::Major),
            IntervalKind::AugmentedNinth => (8, IntervalQuality::Augmented),
            IntervalKind::DiminishedTenth => (9, IntervalQuality::Diminished),
            IntervalKind::MinorTenth => (9, IntervalQuality::Minor),
            IntervalKind::MajorTenth => (9, IntervalQuality::Major),
            IntervalKind::AugmentedTenth => (9, IntervalQuality::Augmented),
            IntervalKind::DiminishedEleventh => (10, IntervalQuality::Diminished),
            IntervalKind::PerfectEleventh => (10, IntervalQuality::Perfect),
            IntervalKind::AugmentedEleventh => (10, IntervalQuality::Augmented),
            IntervalKind::DiminishedTwelfth => (11, IntervalQuality::Diminished),
            IntervalKind::PerfectTwelfth => (11, IntervalQuality::Perfect),
            IntervalKind::AugmentedTwelfth => (11, IntervalQuality::Augmented),
            IntervalKind::DiminishedThirteenth => (12, IntervalQuality::Diminished),
            IntervalKind::MinorThirteenth => (12, IntervalQuality::Minor),
            IntervalKind::MajorThirteenth => (12, IntervalQuality::Major),
            IntervalKind::AugmentedThirteenth => (12, IntervalQuality::Augmented),
            IntervalKind::DiminishedFourteenth => (13, IntervalQuality::Diminished),
            IntervalKind::MinorFourteenth => (13, IntervalQuality::Minor),
            IntervalKind::MajorFourteenth => (13, IntervalQuality::Major),
            IntervalKind::AugmentedFourteenth => (13, IntervalQuality::Augmented),
        }
    }

    /// Diatonic steps spanned, 0 for unisons, 7 for octaves
    pub fn number(self) -> i32 {
        self.parts().0
    }

    pub fn quality(self) -> IntervalQuality {
        self.parts().1
    }

    /// Signed width; the diminished unison is -1
    pub fn semitones(self) -> i32 {
        let (number, quality) = self.parts();
        base_semitones(number) + quality_offset(number, quality).unwrap_or(0)
    }

    pub fn is_simple(self) -> bool {
        self.number() < 7
    }

    pub fn from_number_and_quality(number: i32, quality: IntervalQuality) -> Option<IntervalKind> {
        IntervalKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.parts() == (number, quality))
    }

    /// Interval spanning `steps` letters and `semitones` semitones, if named
    pub fn from_steps_and_semitones(steps: i32, semitones: i32) -> Option<IntervalKind> {
        if !(0..NUMBER_NAMES.len() as i32).contains(&steps) {
            return None;
        }
        let quality = quality_from_offset(steps, semitones - base_semitones(steps))?;
        IntervalKind::from_number_and_quality(steps, quality)
    }

    /// Complement within the octave block: a third becomes a sixth, a
    /// tenth a thirteenth. Applying it twice gives back the interval.
    pub fn inverted(self) -> IntervalKind {
        match self {
            IntervalKind::DiminishedUnison => IntervalKind::AugmentedUnison,
            IntervalKind::PerfectUnison => IntervalKind::PerfectUnison,
            IntervalKind::AugmentedUnison => IntervalKind::DiminishedUnison,
            IntervalKind::DiminishedSecond => IntervalKind::AugmentedSeventh,
            IntervalKind::MinorSecond => IntervalKind::MajorSeventh,
            IntervalKind::MajorSecond => IntervalKind::MinorSeventh,
            IntervalKind::AugmentedSecond => IntervalKind::DiminishedSeventh,
            IntervalKind::DiminishedThird => IntervalKind::AugmentedSixth,
            IntervalKind::MinorThird => IntervalKind::MajorSixth,
            IntervalKind::MajorThird => IntervalKind::MinorSixth,
            IntervalKind::AugmentedThird => IntervalKind::DiminishedSixth,
            IntervalKind::DiminishedFourth => IntervalKind::AugmentedFifth,
            IntervalKind::PerfectFourth => IntervalKind::PerfectFifth,
            IntervalKind::AugmentedFourth => IntervalKind::DiminishedFifth,
            IntervalKind::DiminishedFifth => IntervalKind::AugmentedFourth,
            IntervalKind::PerfectFifth => IntervalKind::PerfectFourth,
            IntervalKind::AugmentedFifth => IntervalKind::DiminishedFourth,
            IntervalKind::DiminishedSixth => IntervalKind::AugmentedThird,
            IntervalKind::MinorSixth => IntervalKind::MajorThird,
            IntervalKind::MajorSixth => IntervalKind::MinorThird,
            IntervalKind::AugmentedSixth => IntervalKind::DiminishedThird,
            IntervalKind::DiminishedSeventh => IntervalKind::AugmentedSecond,
            IntervalKind::MinorSeventh => IntervalKind::MajorSecond,
            IntervalKind::MajorSeventh => IntervalKind::MinorSecond,
            IntervalKind::AugmentedSeventh => IntervalKind::DiminishedSecond,
            IntervalKind::DiminishedOctave => IntervalKind::AugmentedOctave,
            IntervalKind::PerfectOctave => IntervalKind::PerfectOctave,
            IntervalKind::AugmentedOctave => IntervalKind::DiminishedOctave,
            IntervalKind::DiminishedNinth => IntervalKind::AugmentedFourteenth,
            IntervalKind::MinorNinth => IntervalKind::MajorFourteenth,
            IntervalKind::MajorNinth => IntervalKind::MinorFourteenth,
            IntervalKind::AugmentedNinth => IntervalKind::DiminishedFourteenth,
            IntervalKind::DiminishedTenth => IntervalKind::AugmentedThirteenth,
            IntervalKind::MinorTenth => IntervalKind::MajorThirteenth,
            IntervalKind::MajorTenth => IntervalKind::MinorThirteenth,
            IntervalKind::AugmentedTenth => IntervalKind::DiminishedThirteenth,
            IntervalKind::DiminishedEleventh => IntervalKind::AugmentedTwelfth,
            IntervalKind::PerfectEleventh => IntervalKind::PerfectTwelfth,
            IntervalKind::AugmentedEleventh => IntervalKind::DiminishedTwelfth,
            IntervalKind::DiminishedTwelfth => IntervalKind::AugmentedEleventh,
            IntervalKind::PerfectTwelfth => IntervalKind::PerfectEleventh,
            IntervalKind::AugmentedTwelfth => IntervalKind::DiminishedEleventh,
            IntervalKind::DiminishedThirteenth => IntervalKind::AugmentedTenth,
            IntervalKind::MinorThirteenth => IntervalKind::MajorTenth,
            IntervalKind::MajorThirteenth => IntervalKind::MinorTenth,
            IntervalKind::AugmentedThirteenth => IntervalKind::DiminishedTenth,
            IntervalKind::DiminishedFourteenth => IntervalKind::AugmentedNinth,
            IntervalKind::MinorFourteenth => IntervalKind::MajorNinth,
            IntervalKind::MajorFourteenth => IntervalKind::MinorNinth,
            IntervalKind::AugmentedFourteenth => IntervalKind::DiminishedNinth,
        }
    }

    /// E.g. "major third"
    pub fn as_string(self) -> String {
        let (number, quality) = self.parts();
        format!("{} {}", quality.as_str(), NUMBER_NAMES[number as usize])
    }

    /// E.g. "M3", "P8", "A4"
    pub fn as_short_string(self) -> String {
        let (number, quality) = self.parts();
        format!("{}{}", quality.as_short_str(), number + 1)
    }
}

impl fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_short_string())
    }
}

/// Signed semitone width of `kind`
pub fn semitone_distance(kind: IntervalKind) -> i32 {
    kind.semitones()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semitone_widths() {
        assert_eq!(IntervalKind::DiminishedUnison.semitones(), -1);
        assert_eq!(IntervalKind::PerfectUnison.semitones(), 0);
        assert_eq!(IntervalKind::MinorSecond.semitones(), 1);
        assert_eq!(IntervalKind::DiminishedThird.semitones(), 2);
        assert_eq!(IntervalKind::MajorThird.semitones(), 4);
        assert_eq!(IntervalKind::AugmentedFourth.semitones(), 6);
        assert_eq!(IntervalKind::DiminishedFifth.semitones(), 6);
        assert_eq!(IntervalKind::MinorSeventh.semitones(), 10);
        assert_eq!(IntervalKind::PerfectOctave.semitones(), 12);
        assert_eq!(IntervalKind::MajorNinth.semitones(), 14);
        assert_eq!(IntervalKind::AugmentedEleventh.semitones(), 18);
        assert_eq!(IntervalKind::MajorThirteenth.semitones(), 21);
        assert_eq!(IntervalKind::AugmentedFourteenth.semitones(), 24);
        assert_eq!(semitone_distance(IntervalKind::PerfectFifth), 7);
    }

    #[test]
    fn test_catalog_layout() {
        assert!(IntervalKind::ALL.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(IntervalKind::ALL[..IntervalKind::SIMPLE_COUNT]
            .iter()
            .all(|kind| kind.is_simple()));
        assert!(!IntervalKind::ALL[IntervalKind::SIMPLE_COUNT].is_simple());
    }

    #[test]
    fn test_from_steps_and_semitones() {
        for kind in IntervalKind::ALL {
            assert_eq!(
                IntervalKind::from_steps_and_semitones(kind.number(), kind.semitones()),
                Some(kind)
            );
        }
        assert_eq!(IntervalKind::from_steps_and_semitones(2, 6), None);
        assert_eq!(IntervalKind::from_steps_and_semitones(14, 24), None);
        assert_eq!(IntervalKind::from_steps_and_semitones(-1, 0), None);
    }

    #[test]
    fn test_inversion_pairs() {
        assert_eq!(IntervalKind::MajorThird.inverted(), IntervalKind::MinorSixth);
        assert_eq!(IntervalKind::PerfectFifth.inverted(), IntervalKind::PerfectFourth);
        assert_eq!(IntervalKind::AugmentedFourth.inverted(), IntervalKind::DiminishedFifth);
        assert_eq!(IntervalKind::PerfectUnison.inverted(), IntervalKind::PerfectUnison);
        assert_eq!(IntervalKind::PerfectOctave.inverted(), IntervalKind::PerfectOctave);
        assert_eq!(IntervalKind::MajorTenth.inverted(), IntervalKind::MinorThirteenth);
        for kind in IntervalKind::ALL {
            let inverted = kind.inverted();
            assert_eq!(inverted.inverted(), kind);
            assert_eq!(inverted.quality(), kind.quality().inverted());
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(IntervalKind::MajorThird.as_string(), "major third");
        assert_eq!(IntervalKind::DiminishedTwelfth.as_string(), "diminished twelfth");
        assert_eq!(IntervalKind::PerfectOctave.as_short_string(), "P8");
        assert_eq!(IntervalKind::AugmentedFourth.to_string(), "A4");
        assert_eq!(IntervalKind::MinorNinth.to_string(), "m9");
    }
}
