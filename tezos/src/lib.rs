//! Rust-native local forger for Tezos operation groups.
//!
//! This is a thin facade over the three layers that do the actual work:
//! [`codec`] (variable-length naturals, base58check, addresses), [`micheline`]
//! (the recursive Michelson expression encoder), and [`operation`] (per-kind
//! operation encoders and the operation-group assembler). Most callers only
//! need [`operation`]; the lower layers are exposed for callers building
//! their own Micheline values or reusing the base58check primitives
//! directly.

#[doc(inline)]
pub use tezos_codec as codec;

#[doc(inline)]
pub use tezos_micheline as micheline;

#[doc(inline)]
pub use tezos_forge as operation;

pub use tezos_forge::{forge_group, forge_operation, OperationContent, OperationGroup};
