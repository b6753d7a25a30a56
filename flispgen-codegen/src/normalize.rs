use flispgen_table::Operation;

use crate::error::{CodegenError, Result};

/// Byte offset where addressing-mode notation starts in a `shortHand`
/// field. Everything before it is the padded operation-name column.
pub const SHORTHAND_OFFSET: usize = 5;

/// A canonical `(mnemonic, addressing-token)` pair derived from one
/// [`Operation`].
///
/// `mnemonic` borrows from the operation's `ty` field with its register or
/// flag suffix stripped; `addressing` is one of the fixed tokens understood
/// by the emitter, empty for inherent addressing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizedOperation<'a> {
    pub mnemonic: &'a str,
    pub addressing: &'static str,
}

/// Normalize one operation record.
///
/// ```
/// use flispgen_table::Operation;
/// use flispgen_codegen::normalize;
///
/// let op = Operation {
///     code: "95".into(),
///     ty: "ADCA".into(),
///     short_hand: "ADCA #Data".into(),
/// };
/// let norm = normalize(&op)?;
/// assert_eq!((norm.mnemonic, norm.addressing), ("ADC", "Data(b)"));
/// # Ok::<(), flispgen_codegen::CodegenError>(())
/// ```
pub fn normalize(op: &Operation) -> Result<NormalizedOperation<'_>> {
    let content = shorthand_content(&op.short_hand);
    let Some(addressing) = classify(content) else {
        log::error!("unknown addressing shorthand in operation {op:?}");
        return Err(CodegenError::UnknownAddressingShorthand {
            code: op.code.clone(),
            ty: op.ty.clone(),
            shorthand: content.to_string(),
        });
    };
    Ok(NormalizedOperation {
        mnemonic: strip_suffixes(op.ty.trim()),
        addressing,
    })
}

/// Addressing-mode notation of a `shortHand` field: everything past the
/// fixed-width name column, whitespace-trimmed. Empty when the field holds
/// nothing but the name.
pub fn shorthand_content(short_hand: &str) -> &str {
    short_hand.get(SHORTHAND_OFFSET..).unwrap_or("").trim()
}

/// Drop a trailing register suffix (`A`/`X`/`Y`), then a trailing `CC`/`SP`
/// suffix from whatever the first pass left. One pass each, in that order;
/// neither pass recurses.
fn strip_suffixes(ty: &str) -> &str {
    let ty = ty.strip_suffix(['A', 'X', 'Y']).unwrap_or(ty);
    ty.strip_suffix("CC")
        .or_else(|| ty.strip_suffix("SP"))
        .unwrap_or(ty)
}

/// Map a shorthand spelling to its canonical addressing token.
///
/// Spacing around the separating comma is insignificant; everything else is
/// an exact, case-sensitive match. Returns `None` for unrecognized
/// spellings.
fn classify(content: &str) -> Option<&'static str> {
    let token = match collapse_comma_spacing(content).as_str() {
        "" => "",
        "n,X" => "Xn(b)",
        "n,Y" => "Yn(b)",
        "Adr" | "ADR" => "Adr(b)",
        "n,SP" => "SP(b)",
        "#Data" => "Data(b)",
        "Y,SP" => "YSp",
        "SP,Y" => "SpY",
        "X,SP" => "XSp",
        "SP,X" => "SpX",
        "A,X" | "AX" => "AX",
        "A,Y" | "AY" => "AY",
        "A,CC" => "ACc",
        "X,Y" => "XY",
        ",X+" => "Xp",
        ",X-" => "Xm",
        ",+X" => "pX",
        ",-X" => "mX",
        ",Y+" => "Yp",
        ",Y-" => "Ym",
        ",+Y" => "pY",
        ",-Y" => "mY",
        "CC,A" => "CcA",
        "Y,X" => "YX",
        _ => return None,
    };
    Some(token)
}

fn collapse_comma_spacing(content: &str) -> String {
    content
        .split(',')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(ty: &str, short_hand: &str) -> Operation {
        Operation {
            code: "00".to_string(),
            ty: ty.to_string(),
            short_hand: short_hand.to_string(),
        }
    }

    #[test]
    fn register_suffix_is_stripped_once() {
        // LDAX loses its X but does not recurse into LD.
        assert_eq!(normalize(&op("LDAX", "LDAX n,X")).unwrap().mnemonic, "LDA");
    }

    #[test]
    fn flag_suffix_is_stripped() {
        assert_eq!(normalize(&op("BRACC", "BRACC")).unwrap().mnemonic, "BRA");
        assert_eq!(normalize(&op("LDSP", "LDSP #Data")).unwrap().mnemonic, "LD");
    }

    #[test]
    fn no_suffix_is_untouched() {
        assert_eq!(normalize(&op("INC", "INC  Adr")).unwrap().mnemonic, "INC");
    }

    #[test]
    fn single_char_pass_is_unconditional() {
        // The trailing A of LDA is a register suffix like any other.
        assert_eq!(normalize(&op("LDA", "LDA  #Data")).unwrap().mnemonic, "LD");
    }

    #[test]
    fn passes_apply_in_order() {
        // TSPX: the X goes first, then the SP the first pass exposed.
        assert_eq!(normalize(&op("TSPX", "TSPX")).unwrap().mnemonic, "T");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(normalize(&op(" ROL ", "ROL  Adr")).unwrap().mnemonic, "ROL");
    }

    #[test]
    fn short_field_means_inherent_addressing() {
        let binding = op("RTS", "RTS");
        let norm = normalize(&binding).unwrap();
        assert_eq!(norm.addressing, "");
    }

    #[test]
    fn comma_spacing_is_insignificant() {
        let tight_binding = op("STA", "STA  n,X");
        let spaced_binding = op("STA", "STA  n, X");
        let tight = normalize(&tight_binding).unwrap();
        let spaced = normalize(&spaced_binding).unwrap();
        assert_eq!(tight, spaced);
        assert_eq!(tight.addressing, "Xn(b)");
    }

    #[test]
    fn unknown_shorthand_is_reported_with_the_record() {
        let err = normalize(&op("LDA", "LDA  ???")).unwrap_err();
        assert_eq!(
            err,
            CodegenError::UnknownAddressingShorthand {
                code: "00".to_string(),
                ty: "LDA".to_string(),
                shorthand: "???".to_string(),
            }
        );
    }
}
