//! Per-kind operation encoders and the operation-group assembler (L3 of the
//! forging stack).
//!
//! Builds on [`tezos_codec`] for scalars and tagged identifiers and
//! [`tezos_micheline`] for script/parameter/value payloads, and adds the
//! operation-kind dispatch table, the twelve per-kind encoders, and
//! [`forge_group`], which prepends a branch hash and concatenates contents
//! in order.

mod content;
mod encode;
mod error;
mod tags;

pub use content::{
    ActivateAccount, Delegation, Endorsement, EndorsementWithSlot, FailingNoop,
    InlineEndorsement, ManagerFields, OperationContent, OperationGroup, Origination, Parameters,
    RegisterGlobalConstant, Reveal, Script, SmartRollupAddMessages,
    SmartRollupExecuteOutboxMessage, Transaction, TransferTicket,
};
pub use encode::{forge_group, forge_operation};
pub use error::{Error, Result};
pub use tags::{OperationKind, RESERVED_ENTRYPOINTS, TAG_TABLE};

pub use tezos_codec::BigInt;
pub use tezos_micheline::Expr;

#[cfg(feature = "json")]
mod json;
