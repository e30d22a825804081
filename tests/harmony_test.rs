// Harmony structures: catalog contents, inversions and chord spelling

use notation_kernel::harmonies::{build_semitone_chord, structure_of, HarmonyInterval, HarmonyKind};
use notation_kernel::intervals::IntervalKind;
use notation_kernel::models::SemiTonesPitchKind;
use notation_kernel::KernelError;

#[test]
fn test_dominant_seventh_structure() {
    assert_eq!(
        structure_of(HarmonyKind::Dominant).interval_kinds(),
        vec![
            IntervalKind::PerfectUnison,
            IntervalKind::MajorThird,
            IntervalKind::PerfectFifth,
            IntervalKind::MinorSeventh,
        ]
    );
}

#[test]
fn test_registry_returns_the_same_entry() {
    let first = structure_of(HarmonyKind::MinorNinth);
    let second = structure_of(HarmonyKind::MinorNinth);
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_every_inversion() {
    for kind in HarmonyKind::ALL {
        let structure = structure_of(kind);
        for inversion in 0..structure.len() {
            let inverted = structure.inverted(inversion).unwrap();
            assert_eq!(inverted.len(), structure.len());
            assert_eq!(
                inverted.intervals[0],
                structure.bass_interval_for_inversion(inversion).unwrap()
            );

            let raised = inverted
                .intervals
                .iter()
                .filter(|entry| entry.relative_octave == 1)
                .count();
            assert_eq!(raised, inversion, "{:?} inversion {}", kind, inversion);
        }
        assert!(matches!(
            structure.inverted(structure.len()),
            Err(KernelError::InversionOutOfRange { .. })
        ));
    }
}

#[test]
fn test_second_inversion_of_dominant_seventh() {
    let inverted = structure_of(HarmonyKind::Dominant).inverted(2).unwrap();
    let widths: Vec<i32> = inverted.intervals.iter().map(HarmonyInterval::semitones).collect();
    assert_eq!(widths, vec![7, 10, 12, 16]);
}

#[test]
fn test_chord_spelling() {
    use SemiTonesPitchKind::*;

    assert_eq!(
        build_semitone_chord(HarmonyKind::Major, CNatural),
        Ok(vec![CNatural, ENatural, GNatural])
    );
    assert_eq!(
        build_semitone_chord(HarmonyKind::HalfDiminished, FSharp),
        Ok(vec![FSharp, ANatural, CNatural, ENatural])
    );
    assert_eq!(
        build_semitone_chord(HarmonyKind::DominantThirteenth, BFlat),
        Ok(vec![BFlat, DNatural, FNatural, AFlat, CNatural, EFlat, GNatural])
    );
    assert_eq!(
        build_semitone_chord(HarmonyKind::Neapolitan, ANatural),
        Ok(vec![ANatural, CNatural, FNatural])
    );
}

#[test]
fn test_chord_spelling_propagates_transposition_failures() {
    assert!(matches!(
        build_semitone_chord(HarmonyKind::Minor, SemiTonesPitchKind::EDoubleFlat),
        Err(KernelError::UnsupportedAlterationDepth(_))
    ));
}

#[test]
fn test_structures_serialize() {
    let json = serde_json::to_value(structure_of(HarmonyKind::Power)).unwrap();
    assert_eq!(json["kind"], "Power");
    assert_eq!(json["intervals"][1]["interval"], "PerfectFifth");
    assert_eq!(json["intervals"][1]["relative_octave"], 0);
}
