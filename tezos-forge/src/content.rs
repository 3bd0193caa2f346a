use tezos_codec::BigInt;
use tezos_micheline::Expr;

/// The common `source, fee, counter, gas_limit, storage_limit` prefix
/// shared by every manager operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerFields {
    pub source: String,
    pub fee: BigInt,
    pub counter: BigInt,
    pub gas_limit: BigInt,
    pub storage_limit: BigInt,
}

/// The optional `{entrypoint, value}` call attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    pub entrypoint: String,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    pub manager: ManagerFields,
    pub public_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub manager: ManagerFields,
    pub amount: BigInt,
    pub destination: String,
    pub parameters: Option<Parameters>,
}

/// A contract's code and initial storage, both Micheline expressions,
/// each forged as its own length-prefixed array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub code: Expr,
    pub storage: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origination {
    pub manager: ManagerFields,
    pub balance: BigInt,
    pub delegate: Option<String>,
    pub script: Script,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delegation {
    pub manager: ManagerFields,
    pub delegate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endorsement {
    pub level: i32,
}

/// The endorsement inlined inside an `endorsement_with_slot` operation.
/// Its own `kind` is always `"endorsement"`, so only `level` varies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineEndorsement {
    pub branch: String,
    pub level: i32,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndorsementWithSlot {
    pub endorsement: InlineEndorsement,
    pub slot: i16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivateAccount {
    pub pkh: String,
    pub secret: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailingNoop {
    pub arbitrary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterGlobalConstant {
    pub manager: ManagerFields,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferTicket {
    pub manager: ManagerFields,
    pub ticket_contents: Expr,
    pub ticket_ty: Expr,
    pub ticket_ticketer: String,
    pub ticket_amount: BigInt,
    pub destination: String,
    pub entrypoint: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartRollupAddMessages {
    pub manager: ManagerFields,
    /// Each entry is a hex-encoded message; forged as a sequence of
    /// length-prefixed byte strings, itself length-prefixed.
    pub message: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartRollupExecuteOutboxMessage {
    pub manager: ManagerFields,
    pub rollup: String,
    pub cemented_commitment: String,
    pub output_proof: String,
}

/// One entry in an operation group's `contents` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationContent {
    Endorsement(Endorsement),
    EndorsementWithSlot(EndorsementWithSlot),
    ActivateAccount(ActivateAccount),
    FailingNoop(FailingNoop),
    Reveal(Reveal),
    Transaction(Transaction),
    Origination(Origination),
    Delegation(Delegation),
    RegisterGlobalConstant(RegisterGlobalConstant),
    TransferTicket(TransferTicket),
    SmartRollupAddMessages(SmartRollupAddMessages),
    SmartRollupExecuteOutboxMessage(SmartRollupExecuteOutboxMessage),
}

/// `{branch, contents}` — the unit the protocol signs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationGroup {
    pub branch: String,
    pub contents: Vec<OperationContent>,
}
