//! Low-level wire primitives shared by the Tezos operation forger.
//!
//! This crate is the leaf layer (L1) of the forging stack: variable-length
//! naturals and signed integers, fixed-width integers, booleans,
//! length-prefixed byte arrays, and the base58check-prefixed identifiers
//! (`address`, `public_key`, `entrypoint`) built on top of them. Nothing
//! here touches Micheline or operation kinds — those live in
//! `tezos-micheline` and `tezos-forge` respectively.
//!
//! Every encoder here is a pure function: same input, same bytes, every
//! time, on every platform.

mod address;
mod array;
mod base58;
mod bool_;
mod buffer;
mod error;
mod int;
mod nat;

pub use address::{forge_address, forge_entrypoint, forge_public_key};
pub use array::{forge_array, LenWidth};
pub use base58::{decode_base58check, encode_base58check, PrefixEntry, PREFIX_TABLE};
pub use bool_::forge_bool;
pub use buffer::Buffer;
pub use error::{Error, Result};
pub use int::{forge_int, forge_int16, forge_int32, parse_int};
pub use nat::{forge_nat, parse_nat};

pub use num_bigint::BigInt;
