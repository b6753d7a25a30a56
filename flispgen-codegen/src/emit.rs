use std::fmt::Write;

use flispgen_table::Operation;

use crate::error::Result;
use crate::normalize::normalize;

/// Fixed first line of the generated block.
pub const HEADER: &str = "match a {";
/// Fixed trailing lines: the fallback arm and the closing brace.
pub const FOOTER: &str = "_ => return None,\n}";

/// How opcode arms render their right-hand side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// The raw `shortHand` field, verbatim. The arms still carry the
    /// manual's notation and need hand-editing before they compile.
    Passthrough,
    /// Canonical `<mnemonic>(Addressing::<token>)` pairs.
    Normalized,
}

/// Emit the dispatch block for `ops`: one arm per record, in table order,
/// framed by [`HEADER`] and [`FOOTER`].
///
/// In normalized mode the first record whose shorthand does not classify
/// aborts the run; no text is returned in that case.
pub fn emit_match(ops: &[Operation], mode: Mode) -> Result<String> {
    let mut out = String::new();
    let _ = writeln!(out, "{HEADER}");
    for op in ops {
        let _ = writeln!(out, "{}", arm(op, mode)?);
    }
    let _ = writeln!(out, "{FOOTER}");
    Ok(out)
}

fn arm(op: &Operation, mode: Mode) -> Result<String> {
    let rhs = match mode {
        Mode::Passthrough => op.short_hand.clone(),
        Mode::Normalized => {
            let norm = normalize(op)?;
            if norm.addressing.is_empty() {
                norm.mnemonic.to_string()
            } else {
                format!("{}(Addressing::{})", norm.mnemonic, norm.addressing)
            }
        }
    };
    Ok(format!("0x{} => Instruction::{rhs},", op.code))
}
