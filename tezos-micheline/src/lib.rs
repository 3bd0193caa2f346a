//! The recursive Micheline expression encoder (L2 of the forging stack).
//!
//! Consumes [`tezos_codec`]'s primitives (`int`, `array`) and produces the
//! tag-prefixed binary encoding of a Michelson expression: integers,
//! strings, byte literals, primitive applications with 0..n arguments and
//! optional annotations, and sequences.

mod encode;
mod error;
mod expr;
mod opcodes;

#[cfg(feature = "json")]
mod json;

pub use encode::forge_micheline;
pub use error::{Error, Result};
pub use expr::Expr;
pub use opcodes::{primitive_name, primitive_opcode, OPCODES, OPCODES_EXTRA};
