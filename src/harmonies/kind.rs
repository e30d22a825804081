// Chord and scale kinds, with their MusicXML and chord-symbol names

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{KernelError, KernelResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HarmonyKind {
    Major,
    Minor,
    Augmented,
    Diminished,
    Dominant,
    MajorSeventh,
    MinorSeventh,
    DiminishedSeventh,
    AugmentedSeventh,
    HalfDiminished,
    MajorMinor,
    MajorSixth,
    MinorSixth,
    DominantNinth,
    MajorNinth,
    MinorNinth,
    DominantEleventh,
    MajorEleventh,
    MinorEleventh,
    DominantThirteenth,
    MajorThirteenth,
    MinorThirteenth,
    SuspendedSecond,
    SuspendedFourth,
    Neapolitan,
    Italian,
    French,
    German,
    Pedal,
    Power,
    Tristan,
    MinorMajorNinth,
    DominantSuspendedFourth,
    DominantAugmentedFifth,
    DominantMinorNinth,
    DominantAugmentedNinthDiminishedFifth,
    DominantAugmentedNinthAugmentedFifth,
    DominantAugmentedEleventh,
    MajorSeventhAugmentedEleventh,
}

/// Every long name, short name and MusicXML value, mapped back to its kind
static HARMONY_NAMES: Lazy<HashMap<&'static str, HarmonyKind>> = Lazy::new(|| {
    let mut names = HashMap::new();
    for kind in HarmonyKind::ALL {
        let (musicxml, long, short) = kind.names();
        if let Some(musicxml) = musicxml {
            names.insert(musicxml, kind);
        }
        names.insert(long, kind);
        if !short.is_empty() {
            names.insert(short, kind);
        }
    }
    log::debug!("built harmony name map with {} entries", names.len());
    names
});

impl HarmonyKind {
    pub const ALL: [HarmonyKind; 39] = [
        HarmonyKind::Major,
        HarmonyKind::Minor,
        HarmonyKind::Augmented,
        HarmonyKind::Diminished,
        HarmonyKind::Dominant,
        HarmonyKind::MajorSeventh,
        HarmonyKind::MinorSeventh,
        HarmonyKind::DiminishedSeventh,
        HarmonyKind::AugmentedSeventh,
        HarmonyKind::HalfDiminished,
        HarmonyKind::MajorMinor,
        HarmonyKind::MajorSixth,
        HarmonyKind::MinorSixth,
        HarmonyKind::DominantNinth,
        HarmonyKind::MajorNinth,
        HarmonyKind::MinorNinth,
        HarmonyKind::DominantEleventh,
        HarmonyKind::MajorEleventh,
        HarmonyKind::MinorEleventh,
        HarmonyKind::DominantThirteenth,
        HarmonyKind::MajorThirteenth,
        HarmonyKind::MinorThirteenth,
        HarmonyKind::SuspendedSecond,
        HarmonyKind::SuspendedFourth,
        HarmonyKind::Neapolitan,
        HarmonyKind::Italian,
        HarmonyKind::French,
        HarmonyKind::German,
        HarmonyKind::Pedal,
        HarmonyKind::Power,
        HarmonyKind::Tristan,
        HarmonyKind::MinorMajorNinth,
        HarmonyKind::DominantSuspendedFourth,
        HarmonyKind::DominantAugmentedFifth,
        HarmonyKind::DominantMinorNinth,
        HarmonyKind::DominantAugmentedNinthDiminishedFifth,
        HarmonyKind::DominantAugmentedNinthAugmentedFifth,
        HarmonyKind::DominantAugmentedEleventh,
        HarmonyKind::MajorSeventhAugmentedEleventh,
    ];

    /// (MusicXML `<kind>` value, long name, chord-symbol suffix)
    fn names(self) -> (Option<&'static str>, &'static str, &'static str) {
        match self {
            HarmonyKind::Major => (Some("major"), "major", ""),
            HarmonyKind::Minor => (Some("minor"), "minor", "m"),
            HarmonyKind::Augmented => (Some("augmented"), "augmented", "+"),
            HarmonyKind::Diminished => (Some("diminished"), "diminished", "dim"),
            HarmonyKind::Dominant => (Some("dominant"), "dominant seventh", "7"),
            HarmonyKind::MajorSeventh => (Some("major-seventh"), "major seventh", "maj7"),
            HarmonyKind::MinorSeventh => (Some("minor-seventh"), "minor seventh", "m7"),
            HarmonyKind::DiminishedSeventh => (Some("diminished-seventh"), "diminished seventh", "dim7"),
            HarmonyKind::AugmentedSeventh => (Some("augmented-seventh"), "augmented seventh", "+7"),
            HarmonyKind::HalfDiminished => (Some("half-diminished"), "half-diminished seventh", "m7b5"),
            HarmonyKind::MajorMinor => (Some("major-minor"), "minor major seventh", "m(maj7)"),
            HarmonyKind::MajorSixth => (Some("major-sixth"), "major sixth", "6"),
            HarmonyKind::MinorSixth => (Some("minor-sixth"), "minor sixth", "m6"),
            HarmonyKind::DominantNinth => (Some("dominant-ninth"), "dominant ninth", "9"),
            HarmonyKind::MajorNinth => (Some("major-ninth"), "major ninth", "maj9"),
            HarmonyKind::MinorNinth => (Some("minor-ninth"), "minor ninth", "m9"),
            HarmonyKind::DominantEleventh => (Some("dominant-11th"), "dominant eleventh", "11"),
            HarmonyKind::MajorEleventh => (Some("major-11th"), "major eleventh", "maj11"),
            HarmonyKind::MinorEleventh => (Some("minor-11th"), "minor eleventh", "m11"),
            HarmonyKind::DominantThirteenth => (Some("dominant-13th"), "dominant thirteenth", "13"),
            HarmonyKind::MajorThirteenth => (Some("major-13th"), "major thirteenth", "maj13"),
            HarmonyKind::MinorThirteenth => (Some("minor-13th"), "minor thirteenth", "m13"),
            HarmonyKind::SuspendedSecond => (Some("suspended-second"), "suspended second", "sus2"),
            HarmonyKind::SuspendedFourth => (Some("suspended-fourth"), "suspended fourth", "sus4"),
            HarmonyKind::Neapolitan => (Some("Neapolitan"), "Neapolitan sixth", "N6"),
            HarmonyKind::Italian => (Some("Italian"), "Italian sixth", "It+6"),
            HarmonyKind::French => (Some("French"), "French sixth", "Fr+6"),
            HarmonyKind::German => (Some("German"), "German sixth", "Ger+6"),
            HarmonyKind::Pedal => (Some("pedal"), "pedal", "ped"),
            HarmonyKind::Power => (Some("power"), "power chord", "5"),
            HarmonyKind::Tristan => (Some("Tristan"), "Tristan chord", "tristan"),
            HarmonyKind::MinorMajorNinth => (None, "minor major ninth", "m(maj9)"),
            HarmonyKind::DominantSuspendedFourth => (None, "dominant suspended fourth", "7sus4"),
            HarmonyKind::DominantAugmentedFifth => (None, "dominant augmented fifth", "7#5"),
            HarmonyKind::DominantMinorNinth => (None, "dominant minor ninth", "7b9"),
            HarmonyKind::DominantAugmentedNinthDiminishedFifth => (None, "dominant augmented ninth diminished fifth", "7#9b5"),
            HarmonyKind::DominantAugmentedNinthAugmentedFifth => (None, "dominant augmented ninth augmented fifth", "7#9#5"),
            HarmonyKind::DominantAugmentedEleventh => (None, "dominant augmented eleventh", "7#11"),
            HarmonyKind::MajorSeventhAugmentedEleventh => (None, "major seventh augmented eleventh", "maj7#11"),
        }
    }

    /// Parse a MusicXML `<kind>` element value
    pub fn from_musicxml_kind(value: &str) -> KernelResult<HarmonyKind> {
        let value = value.trim();
        HarmonyKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.names().0 == Some(value))
            .ok_or_else(|| KernelError::UnknownHarmonyKind(value.to_string()))
    }

    /// `None` for the extended kinds MusicXML has no value for
    pub fn as_musicxml_kind(self) -> Option<&'static str> {
        self.names().0
    }

    /// Look a kind up by any of its names ("dominant seventh", "7", "dominant")
    pub fn from_name(name: &str) -> KernelResult<HarmonyKind> {
        HARMONY_NAMES
            .get(name.trim())
            .copied()
            .ok_or_else(|| KernelError::UnknownHarmonyKind(name.to_string()))
    }

    pub fn as_string(self) -> &'static str {
        self.names().1
    }

    /// Chord-symbol suffix, empty for a plain major triad
    pub fn as_short_string(self) -> &'static str {
        self.names().2
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_musicxml_kinds() {
        assert_eq!(HarmonyKind::from_musicxml_kind("dominant"), Ok(HarmonyKind::Dominant));
        assert_eq!(
            HarmonyKind::from_musicxml_kind(" minor-11th "),
            Ok(HarmonyKind::MinorEleventh)
        );
        assert_eq!(HarmonyKind::from_musicxml_kind("Tristan"), Ok(HarmonyKind::Tristan));
        assert!(HarmonyKind::from_musicxml_kind("other").is_err());
        for kind in HarmonyKind::ALL {
            if let Some(value) = kind.as_musicxml_kind() {
                assert_eq!(HarmonyKind::from_musicxml_kind(value), Ok(kind));
            }
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(HarmonyKind::Dominant.as_string(), "dominant seventh");
        assert_eq!(HarmonyKind::Dominant.as_short_string(), "7");
        assert_eq!(HarmonyKind::HalfDiminished.as_short_string(), "m7b5");
        assert_eq!(HarmonyKind::Major.as_short_string(), "");
        assert_eq!(HarmonyKind::German.to_string(), "German sixth");
        assert_eq!(HarmonyKind::DominantAugmentedEleventh.as_musicxml_kind(), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(HarmonyKind::from_name("maj7"), Ok(HarmonyKind::MajorSeventh));
        assert_eq!(HarmonyKind::from_name("minor seventh"), Ok(HarmonyKind::MinorSeventh));
        assert_eq!(HarmonyKind::from_name("7#9b5"), Ok(HarmonyKind::DominantAugmentedNinthDiminishedFifth));
        assert_eq!(
            HarmonyKind::from_name("X"),
            Err(KernelError::UnknownHarmonyKind("X".to_string()))
        );
        for kind in HarmonyKind::ALL {
            assert_eq!(HarmonyKind::from_name(kind.as_string()), Ok(kind));
        }
    }
}
