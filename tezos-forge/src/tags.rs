//! The operation-kind to tag-byte table used by the Tezos protocol's
//! operation encoding.
//!
//! Exposed twice on purpose: [`OperationKind`] is a closed enum so the
//! encoder's dispatch is exhaustive and `UnsupportedKind` is unreachable
//! once a `content` has been classified into one, while [`TAG_TABLE`]
//! is the same mapping as plain data, for callers that want to inspect
//! or validate it.

/// One case per operation kind the forger knows how to encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Endorsement,
    EndorsementWithSlot,
    ActivateAccount,
    FailingNoop,
    Reveal,
    Transaction,
    Origination,
    Delegation,
    RegisterGlobalConstant,
    TransferTicket,
    SmartRollupAddMessages,
    SmartRollupExecuteOutboxMessage,
}

impl OperationKind {
    /// Parses the wire name used in the `kind` field of a content record.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "endorsement" => OperationKind::Endorsement,
            "endorsement_with_slot" => OperationKind::EndorsementWithSlot,
            "activate_account" => OperationKind::ActivateAccount,
            "failing_noop" => OperationKind::FailingNoop,
            "reveal" => OperationKind::Reveal,
            "transaction" => OperationKind::Transaction,
            "origination" => OperationKind::Origination,
            "delegation" => OperationKind::Delegation,
            "register_global_constant" => OperationKind::RegisterGlobalConstant,
            "transfer_ticket" => OperationKind::TransferTicket,
            "smart_rollup_add_messages" => OperationKind::SmartRollupAddMessages,
            "smart_rollup_execute_outbox_message" => {
                OperationKind::SmartRollupExecuteOutboxMessage
            }
            _ => return None,
        })
    }

    /// Parses the wire name, raising `UnsupportedKind` on anything outside
    /// the dispatch table — the one place that error kind is actually
    /// reachable, for callers classifying a `kind` string without going
    /// through the typed JSON boundary in `crate::json`.
    pub fn parse(name: &str) -> crate::error::Result<Self> {
        Self::from_name(name).ok_or_else(|| crate::error::Error::UnsupportedKind(name.to_string()))
    }

    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Endorsement => "endorsement",
            OperationKind::EndorsementWithSlot => "endorsement_with_slot",
            OperationKind::ActivateAccount => "activate_account",
            OperationKind::FailingNoop => "failing_noop",
            OperationKind::Reveal => "reveal",
            OperationKind::Transaction => "transaction",
            OperationKind::Origination => "origination",
            OperationKind::Delegation => "delegation",
            OperationKind::RegisterGlobalConstant => "register_global_constant",
            OperationKind::TransferTicket => "transfer_ticket",
            OperationKind::SmartRollupAddMessages => "smart_rollup_add_messages",
            OperationKind::SmartRollupExecuteOutboxMessage => {
                "smart_rollup_execute_outbox_message"
            }
        }
    }

    /// The single tag byte this kind forges to. `endorsement_with_slot`'s
    /// `0x15` is the value later protocol versions assigned it; see
    /// `DESIGN.md` for the sourcing note.
    pub fn tag(self) -> u8 {
        match self {
            OperationKind::Endorsement => 0x00,
            OperationKind::EndorsementWithSlot => 0x15,
            OperationKind::ActivateAccount => 0x04,
            OperationKind::FailingNoop => 0x11,
            OperationKind::Reveal => 0x6b,
            OperationKind::Transaction => 0x6c,
            OperationKind::Origination => 0x6d,
            OperationKind::Delegation => 0x6e,
            OperationKind::RegisterGlobalConstant => 0x6f,
            OperationKind::TransferTicket => 0x9e,
            OperationKind::SmartRollupAddMessages => 0xc9,
            OperationKind::SmartRollupExecuteOutboxMessage => 0xce,
        }
    }
}

/// The same kind->tag mapping as data, in increasing tag order.
pub const TAG_TABLE: &[(&str, u8)] = &[
    ("endorsement", 0x00),
    ("activate_account", 0x04),
    ("failing_noop", 0x11),
    ("endorsement_with_slot", 0x15),
    ("reveal", 0x6b),
    ("transaction", 0x6c),
    ("origination", 0x6d),
    ("delegation", 0x6e),
    ("register_global_constant", 0x6f),
    ("transfer_ticket", 0x9e),
    ("smart_rollup_add_messages", 0xc9),
    ("smart_rollup_execute_outbox_message", 0xce),
];

/// Six reserved entrypoint names compress to a single tag byte.
/// Re-exported here alongside the operation tag table since both are
/// "dispatch constants" in the same sense.
pub const RESERVED_ENTRYPOINTS: &[(&str, u8)] = &[
    ("default", 0x00),
    ("root", 0x01),
    ("do", 0x02),
    ("set_delegate", 0x03),
    ("remove_delegate", 0x04),
    ("deposit", 0x05),
];
