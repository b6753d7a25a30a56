use thiserror::Error;

/// Errors from the code-generation core.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// The addressing-mode shorthand matched none of the recognized
    /// spellings. Carries the offending record's fields for diagnostics.
    #[error("unknown addressing shorthand {shorthand:?} for opcode 0x{code} (type {ty})")]
    UnknownAddressingShorthand {
        code: String,
        ty: String,
        shorthand: String,
    },
}

pub type Result<T> = std::result::Result<T, CodegenError>;
