use serde::{Deserialize, Serialize};

/// One instruction-set record: opcode, operation type, addressing shorthand.
///
/// Records are read-only inputs; they are built once (by the loader or the
/// built-in table) and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Two-hex-digit opcode, e.g. `"A9"`. Unique across a table.
    pub code: String,
    /// Raw operation-type identifier, possibly carrying a trailing register
    /// suffix (`A`/`X`/`Y`) or a trailing `CC`/`SP` suffix.
    #[serde(rename = "type")]
    pub ty: String,
    /// Fixed-width shorthand column: a five-character name prefix followed
    /// by the manual's addressing-mode notation (possibly empty).
    #[serde(rename = "shortHand")]
    pub short_hand: String,
}
