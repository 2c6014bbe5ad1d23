use stave::{mode, parse, write, Column, Key, PitchClass};
use PitchClass::*;

#[test]
fn major_scales() {
    let cases: [(PitchClass, [PitchClass; 7]); 12] = [
        (A, [A, B, Cs, D, E, Fs, Gs]),
        (Bf, [Bf, C, D, Ef, F, G, A]),
        (B, [B, Cs, Ds, E, Fs, Gs, As]),
        (C, [C, D, E, F, G, A, B]),
        (Df, [Df, Ef, F, Gf, Af, Bf, C]),
        (D, [D, E, Fs, G, A, B, Cs]),
        (Ef, [Ef, F, G, Af, Bf, C, D]),
        (E, [E, Fs, Gs, A, B, Cs, Ds]),
        (F, [F, G, A, Bf, C, D, E]),
        (Gf, [Gf, Af, Bf, Cf, Df, Ef, F]),
        (G, [G, A, B, C, D, E, Fs]),
        (Af, [Af, Bf, C, Df, Ef, F, G]),
    ];
    for (tonic, expected) in cases {
        let key = Key::new(tonic, mode::MAJOR).unwrap();
        assert_eq!(key.scale(), expected, "{tonic} major");
    }
}

#[test]
fn minor_scales() {
    let cases: [(PitchClass, [PitchClass; 7]); 12] = [
        (A, [A, B, C, D, E, F, G]),
        (Bf, [Bf, C, Df, Ef, F, Gf, Af]),
        (B, [B, Cs, D, E, Fs, G, A]),
        (C, [C, D, Ef, F, G, Af, Bf]),
        (Df, [Df, Ef, Ff, Gf, Af, Bff, Cf]),
        (D, [D, E, F, G, A, Bf, C]),
        (Ef, [Ef, F, Gf, Af, Bf, Cf, Df]),
        (E, [E, Fs, G, A, B, C, D]),
        (F, [F, G, Af, Bf, C, Df, Ef]),
        (Gf, [Gf, Af, Bff, Cf, Df, Eff, Ff]),
        (G, [G, A, Bf, C, D, Ef, F]),
        (Af, [Af, Bf, Cf, Df, Ef, Ff, Gf]),
    ];
    for (tonic, expected) in cases {
        let key = Key::new(tonic, mode::MINOR).unwrap();
        assert_eq!(key.scale(), expected, "{tonic} minor");
    }
}

#[test]
fn containment_matches_scale() {
    let key = Key::new(A, mode::MINOR).unwrap();
    for class in key.scale() {
        assert!(key.contains(class), "{class} in a minor");
    }
    assert!(!key.contains(Ef));
    assert!(!key.contains(Gs));

    let c_major = Key::new(C, mode::MAJOR).unwrap();
    assert!(c_major.contains(E));
    assert!(!c_major.contains(Ef));
}

#[test]
fn key_text_round_trip() {
    for tonic in [C, G, D, A, E, B, F, Bf, Ef, Af, Df, Gf] {
        for (offsets, word) in [(mode::MAJOR, "major"), (mode::MINOR, "minor")] {
            let key: Column = Key::new(tonic, offsets).unwrap().into();
            let text = write(&key).unwrap();
            assert_eq!(text, format!("\\key {} \\{}", tonic.name(), word));
            assert_eq!(parse(&text).unwrap(), key);
        }
    }
}
