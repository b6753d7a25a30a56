use flispgen_codegen::{CodegenError, normalize};
use flispgen_table::Operation;

fn op_with_content(content: &str) -> Operation {
    Operation {
        code: "00".to_string(),
        ty: "LDX".to_string(),
        short_hand: format!("LDX  {content}"),
    }
}

#[test]
fn every_recognized_spelling_maps_to_its_token() {
    // One row per recognized notation, every accepted spelling of it.
    let table: &[(&[&str], &str)] = &[
        (&[""], ""),
        (&["n,X", "n, X"], "Xn(b)"),
        (&["n,Y", "n, Y"], "Yn(b)"),
        (&["Adr", "ADR"], "Adr(b)"),
        (&["n,SP", "n, SP"], "SP(b)"),
        (&["#Data"], "Data(b)"),
        (&["Y,SP", "Y, SP"], "YSp"),
        (&["SP,Y", "SP, Y"], "SpY"),
        (&["X,SP", "X, SP"], "XSp"),
        (&["SP,X", "SP, X"], "SpX"),
        (&["A,X", "A, X", "AX"], "AX"),
        (&["A,Y", "A, Y", "AY"], "AY"),
        (&["A,CC", "A, CC"], "ACc"),
        (&["X,Y", "X, Y"], "XY"),
        (&[",X+"], "Xp"),
        (&[",X-"], "Xm"),
        (&[",+X"], "pX"),
        (&[",-X"], "mX"),
        (&[",Y+"], "Yp"),
        (&[",Y-"], "Ym"),
        (&[",+Y"], "pY"),
        (&[",-Y"], "mY"),
        (&["CC,A", "CC, A"], "CcA"),
        (&["Y,X", "Y, X"], "YX"),
    ];

    for (spellings, token) in table {
        for spelling in *spellings {
            let op = op_with_content(spelling);
            let norm = normalize(&op).unwrap_or_else(|e| panic!("{spelling:?}: {e}"));
            assert_eq!(norm.addressing, *token, "spelling {spelling:?}");
        }
    }
}

#[test]
fn spacing_variants_agree() {
    for (tight, spaced) in [
        ("n,X", "n, X"),
        ("n,SP", "n, SP"),
        ("SP,Y", "SP, Y"),
        ("CC,A", "CC, A"),
    ] {
        assert_eq!(
            normalize(&op_with_content(tight)).unwrap(),
            normalize(&op_with_content(spaced)).unwrap(),
            "{tight:?} vs {spaced:?}"
        );
    }
}

#[test]
fn classification_is_case_sensitive() {
    // Only Adr has an upper-case alias; other casings are not guessed.
    assert!(normalize(&op_with_content("adr")).is_err());
    assert!(normalize(&op_with_content("#data")).is_err());
    assert!(normalize(&op_with_content("N,X")).is_err());
}

#[test]
fn unknown_shorthand_fails_with_the_record_fields() {
    let op = Operation {
        code: "F2".to_string(),
        ty: "STA".to_string(),
        short_hand: "STA  n,Q".to_string(),
    };
    let err = normalize(&op).unwrap_err();
    assert_eq!(
        err,
        CodegenError::UnknownAddressingShorthand {
            code: "F2".to_string(),
            ty: "STA".to_string(),
            shorthand: "n,Q".to_string(),
        }
    );
}
