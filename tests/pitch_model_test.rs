// Pitch encodings, octaves and locale spelling

use notation_kernel::models::{
    midi_note_number, octave_from_commas_and_quotes, pitch_and_octave_as_string,
    pitch_and_octave_from_string, quarter_tones_pitch_kind_as_string_in_language,
    quarter_tones_pitch_kind_from_diatonic_pitch_and_alteration,
    quarter_tones_pitch_kind_from_string, AlterationKind, DiatonicPitchKind, Octave,
    PitchLanguage, QuarterTonesPitchKind, SemiTonesPitchKind,
};
use notation_kernel::KernelError;

#[test]
fn test_letter_and_alteration_round_trip() {
    for letter in DiatonicPitchKind::ALL {
        for alteration in AlterationKind::ALL {
            let pitch =
                quarter_tones_pitch_kind_from_diatonic_pitch_and_alteration(letter, Some(alteration))
                    .unwrap();
            assert_eq!(pitch.letter(), letter);
            assert_eq!(pitch.alteration(), alteration);
        }
    }
    assert_eq!(
        quarter_tones_pitch_kind_from_diatonic_pitch_and_alteration(DiatonicPitchKind::C, None),
        Err(KernelError::InvalidAlteration)
    );
}

#[test]
fn test_encodings_agree_on_enharmonic_identity() {
    for &pitch in SemiTonesPitchKind::ALL {
        let quarter_tones = pitch.quarter_tones_pitch_kind();
        assert_eq!(quarter_tones.semitones_pitch_kind(), pitch);
        assert_eq!(quarter_tones.quarter_tones_above_c(), 2 * pitch.semitones_above_c());
    }
}

#[test]
fn test_parsed_step_and_alter() {
    let letter = DiatonicPitchKind::from_musicxml_step("E").unwrap();
    let alteration = AlterationKind::from_musicxml_alter(-0.5).unwrap();
    let pitch =
        quarter_tones_pitch_kind_from_diatonic_pitch_and_alteration(letter, Some(alteration)).unwrap();
    assert_eq!(pitch, QuarterTonesPitchKind::ESemiFlat);
    assert_eq!(
        quarter_tones_pitch_kind_as_string_in_language(pitch, PitchLanguage::Nederlands),
        "eeh"
    );
    assert!(AlterationKind::from_musicxml_alter(2.5).is_err());
}

#[test]
fn test_octave_marks() {
    assert_eq!(octave_from_commas_and_quotes("''"), Ok(Octave::Octave5));
    assert_eq!(octave_from_commas_and_quotes(""), Ok(Octave::Octave3));
    assert_eq!(octave_from_commas_and_quotes(",,"), Ok(Octave::Octave1));
    assert!(matches!(
        octave_from_commas_and_quotes("',"),
        Err(KernelError::MalformedOctaveSpec(_))
    ));
    for octave in Octave::ALL {
        assert_eq!(octave_from_commas_and_quotes(&octave.as_commas_and_quotes()), Ok(octave));
    }
}

#[test]
fn test_octave_monotonicity() {
    for octave in &Octave::ALL[1..Octave::ALL.len() - 1] {
        assert_eq!(octave.predecessor().and_then(Octave::successor), Some(*octave));
        assert_eq!(octave.successor().and_then(Octave::predecessor), Some(*octave));
    }
    assert_eq!(Octave::Octave9.successor(), None);
    assert_eq!(Octave::Octave0.predecessor(), None);
}

#[test]
fn test_names_round_trip_in_every_language() {
    for language in PitchLanguage::ALL {
        for &pitch in QuarterTonesPitchKind::ALL {
            let name = quarter_tones_pitch_kind_as_string_in_language(pitch, language);
            assert_eq!(
                quarter_tones_pitch_kind_from_string(language, &name),
                Ok(pitch),
                "{} in {}",
                name,
                language
            );
            for octave in [Octave::Octave1, Octave::Octave3, Octave::Octave6] {
                let spec = pitch_and_octave_as_string(language, pitch, octave);
                assert_eq!(pitch_and_octave_from_string(language, &spec), Ok((pitch, octave)));
            }
        }
    }
}

#[test]
fn test_malformed_pitch_strings() {
    assert!(matches!(
        pitch_and_octave_from_string(PitchLanguage::Nederlands, "c'x"),
        Err(KernelError::MalformedPitchString(_))
    ));
    assert!(matches!(
        pitch_and_octave_from_string(PitchLanguage::Nederlands, "cs'"),
        Err(KernelError::UnknownPitchName { .. })
    ));
}

#[test]
fn test_midi_numbers() {
    assert_eq!(midi_note_number(SemiTonesPitchKind::CNatural, Octave::Octave4), 60);
    assert_eq!(midi_note_number(SemiTonesPitchKind::ANatural, Octave::Octave4), 69);
    assert_eq!(midi_note_number(SemiTonesPitchKind::BSharp, Octave::Octave3), 60);
    assert_eq!(midi_note_number(SemiTonesPitchKind::CFlat, Octave::Octave4), 59);
}
