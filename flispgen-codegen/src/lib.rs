//! Code generator for the FLISP opcode dispatch table.
//!
//! Consumes an ordered sequence of instruction-set records and produces the
//! text of a Rust `match` block mapping each opcode to an instruction arm,
//! either verbatim (pass-through) or normalized into canonical
//! `Instruction`/`Addressing` pairs.

pub mod emit;
pub mod error;
pub mod normalize;

pub use emit::{Mode, emit_match};
pub use error::{CodegenError, Result};
pub use normalize::{NormalizedOperation, normalize, shorthand_content};
