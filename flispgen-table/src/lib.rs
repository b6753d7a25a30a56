//! FLISP instruction-set tables: the record type, the built-in table, and a
//! loader for external table files.

pub mod builtin;
pub mod error;
pub mod operation;

use std::collections::HashSet;
use std::path::Path;

use error::Result;
pub use error::TableError;
pub use operation::Operation;

/// Parse an operation table from YAML text.
///
/// The format is a sequence of `{code, type, shortHand}` mappings:
///
/// ```yaml
/// - code: "A9"
///   type: ANDA
///   shortHand: "ANDA Adr"
/// ```
pub fn from_yaml(text: &str) -> Result<Vec<Operation>> {
    let ops: Vec<Operation> = serde_yaml::from_str(text)?;
    warn_on_duplicates(&ops);
    Ok(ops)
}

/// Load an operation table from a YAML file.
pub fn open(path: &Path) -> Result<Vec<Operation>> {
    let text = std::fs::read_to_string(path).map_err(|e| TableError::Io(e.to_string()))?;
    from_yaml(&text)
}

// Duplicate opcodes are diagnostic only; the table is not validated here.
fn warn_on_duplicates(ops: &[Operation]) {
    let mut seen = HashSet::new();
    for op in ops {
        if !seen.insert(op.code.as_str()) {
            log::warn!("duplicate opcode 0x{} in table: {op:?}", op.code);
        }
    }
}
