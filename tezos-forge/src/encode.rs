use tezos_codec::{
    decode_base58check, forge_address, forge_array, forge_bool, forge_entrypoint, forge_int16,
    forge_int32, forge_nat, forge_public_key, Buffer, LenWidth,
};
use tezos_micheline::forge_micheline;

use crate::content::{
    ActivateAccount, Delegation, Endorsement, EndorsementWithSlot, FailingNoop,
    InlineEndorsement, ManagerFields, OperationContent, OperationGroup, Origination, Parameters,
    RegisterGlobalConstant, Reveal, Script, SmartRollupAddMessages,
    SmartRollupExecuteOutboxMessage, Transaction, TransferTicket,
};
use crate::error::Result;
use crate::tags::OperationKind;

/// `secret` and `output_proof` fields arrive as lowercase hex, decoded
/// verbatim with no base58check framing.
fn decode_hex(field: &'static str, s: &str) -> Result<Vec<u8>> {
    hex::decode(s)
        .map_err(|_| tezos_codec::Error::invalid_argument(field, s))
        .map_err(Into::into)
}

fn forge_manager_prefix(tag: u8, manager: &ManagerFields) -> Result<Buffer> {
    let mut buf = Buffer::new();
    buf.push_byte(tag);
    buf.extend(&forge_address("source", &manager.source, true)?);
    buf.extend(&forge_nat("fee", &manager.fee)?);
    buf.extend(&forge_nat("counter", &manager.counter)?);
    buf.extend(&forge_nat("gas_limit", &manager.gas_limit)?);
    buf.extend(&forge_nat("storage_limit", &manager.storage_limit)?);
    Ok(buf)
}

fn forge_optional_delegate(delegate: &Option<String>) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    match delegate {
        Some(addr) => {
            out.push(forge_bool(true));
            out.extend(forge_address("delegate", addr, true)?);
        }
        None => out.push(forge_bool(false)),
    }
    Ok(out)
}

fn forge_script(script: &Script) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.extend(forge_array(
        "code",
        &forge_micheline(&script.code)?,
        LenWidth::Four,
    )?);
    out.extend(forge_array(
        "storage",
        &forge_micheline(&script.storage)?,
        LenWidth::Four,
    )?);
    Ok(out)
}

fn forge_reveal(content: &Reveal) -> Result<Vec<u8>> {
    let mut buf = forge_manager_prefix(OperationKind::Reveal.tag(), &content.manager)?;
    buf.extend(&forge_public_key("public_key", &content.public_key)?);
    Ok(buf.into_vec())
}

/// Whether a `Parameters` block contributes anything past the
/// `bool(false)` shortcut: a `default` entrypoint call carrying a bare
/// `Unit` forges identically to "no parameters at all".
fn has_parameters(parameters: &Parameters) -> bool {
    !(parameters.entrypoint == "default" && parameters.value.is_unit())
}

fn forge_transaction(content: &Transaction) -> Result<Vec<u8>> {
    let mut buf = forge_manager_prefix(OperationKind::Transaction.tag(), &content.manager)?;
    buf.extend(&forge_nat("amount", &content.amount)?);
    buf.extend(&forge_address("destination", &content.destination, false)?);

    match &content.parameters {
        Some(parameters) if has_parameters(parameters) => {
            buf.push_byte(forge_bool(true));
            buf.extend(&forge_entrypoint("parameters.entrypoint", &parameters.entrypoint)?);
            buf.extend(&forge_array(
                "parameters.value",
                &forge_micheline(&parameters.value)?,
                LenWidth::Four,
            )?);
        }
        _ => buf.push_byte(forge_bool(false)),
    }

    Ok(buf.into_vec())
}

fn forge_origination(content: &Origination) -> Result<Vec<u8>> {
    let mut buf = forge_manager_prefix(OperationKind::Origination.tag(), &content.manager)?;
    buf.extend(&forge_nat("balance", &content.balance)?);
    buf.extend(&forge_optional_delegate(&content.delegate)?);
    buf.extend(&forge_script(&content.script)?);
    Ok(buf.into_vec())
}

fn forge_delegation(content: &Delegation) -> Result<Vec<u8>> {
    let mut buf = forge_manager_prefix(OperationKind::Delegation.tag(), &content.manager)?;
    buf.extend(&forge_optional_delegate(&content.delegate)?);
    Ok(buf.into_vec())
}

fn forge_endorsement(content: &Endorsement) -> Result<Vec<u8>> {
    let mut buf = Buffer::new();
    buf.push_byte(OperationKind::Endorsement.tag());
    buf.extend(&forge_int32("level", &content.level.into())?);
    Ok(buf.into_vec())
}

/// The endorsement inlined in `endorsement_with_slot`. Its tag is a
/// `nat`, not the usual fixed-width operation tag byte — a quirk of how
/// the protocol nests a whole signed endorsement inside the wrapping
/// operation.
fn forge_inline_endorsement(inline: &InlineEndorsement) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.extend(decode_base58check("branch", &inline.branch)?);
    out.extend(forge_nat(
        "endorsement_tag",
        &OperationKind::Endorsement.tag().into(),
    )?);
    out.extend(forge_int32("level", &inline.level.into())?);
    out.extend(decode_base58check("signature", &inline.signature)?);
    Ok(out)
}

fn forge_endorsement_with_slot(content: &EndorsementWithSlot) -> Result<Vec<u8>> {
    let mut buf = Buffer::new();
    buf.push_byte(OperationKind::EndorsementWithSlot.tag());
    buf.extend(&forge_array(
        "endorsement",
        &forge_inline_endorsement(&content.endorsement)?,
        LenWidth::Four,
    )?);
    buf.extend(&forge_int16("slot", &content.slot.into())?);
    Ok(buf.into_vec())
}

fn forge_activate_account(content: &ActivateAccount) -> Result<Vec<u8>> {
    let mut buf = Buffer::new();
    buf.push_byte(OperationKind::ActivateAccount.tag());
    buf.extend(&decode_base58check("pkh", &content.pkh)?);
    buf.extend(&decode_hex("secret", &content.secret)?);
    Ok(buf.into_vec())
}

fn forge_failing_noop(content: &FailingNoop) -> Result<Vec<u8>> {
    let mut buf = Buffer::new();
    buf.push_byte(OperationKind::FailingNoop.tag());
    buf.extend(&forge_array(
        "arbitrary",
        content.arbitrary.as_bytes(),
        LenWidth::Four,
    )?);
    Ok(buf.into_vec())
}

fn forge_register_global_constant(content: &RegisterGlobalConstant) -> Result<Vec<u8>> {
    let mut buf =
        forge_manager_prefix(OperationKind::RegisterGlobalConstant.tag(), &content.manager)?;
    buf.extend(&forge_array(
        "value",
        &forge_micheline(&content.value)?,
        LenWidth::Four,
    )?);
    Ok(buf.into_vec())
}

fn forge_transfer_ticket(content: &TransferTicket) -> Result<Vec<u8>> {
    let mut buf = forge_manager_prefix(OperationKind::TransferTicket.tag(), &content.manager)?;
    buf.extend(&forge_array(
        "ticket_contents",
        &forge_micheline(&content.ticket_contents)?,
        LenWidth::Four,
    )?);
    buf.extend(&forge_array(
        "ticket_ty",
        &forge_micheline(&content.ticket_ty)?,
        LenWidth::Four,
    )?);
    buf.extend(&forge_address(
        "ticket_ticketer",
        &content.ticket_ticketer,
        false,
    )?);
    buf.extend(&forge_nat("ticket_amount", &content.ticket_amount)?);
    buf.extend(&forge_address("destination", &content.destination, false)?);
    buf.extend(&forge_array(
        "entrypoint",
        content.entrypoint.as_bytes(),
        LenWidth::Four,
    )?);
    Ok(buf.into_vec())
}

fn forge_smart_rollup_add_messages(content: &SmartRollupAddMessages) -> Result<Vec<u8>> {
    let mut buf = forge_manager_prefix(
        OperationKind::SmartRollupAddMessages.tag(),
        &content.manager,
    )?;
    let mut inner = Vec::new();
    for msg in &content.message {
        let bytes = decode_hex("message", msg)?;
        inner.extend(forge_array("message[]", &bytes, LenWidth::Four)?);
    }
    buf.extend(&forge_array("message", &inner, LenWidth::Four)?);
    Ok(buf.into_vec())
}

fn forge_smart_rollup_execute_outbox_message(
    content: &SmartRollupExecuteOutboxMessage,
) -> Result<Vec<u8>> {
    let mut buf = forge_manager_prefix(
        OperationKind::SmartRollupExecuteOutboxMessage.tag(),
        &content.manager,
    )?;
    buf.extend(&decode_base58check("rollup", &content.rollup)?);
    buf.extend(&decode_base58check(
        "cemented_commitment",
        &content.cemented_commitment,
    )?);
    let output_proof = decode_hex("output_proof", &content.output_proof)?;
    buf.extend(&forge_array("output_proof", &output_proof, LenWidth::Four)?);
    Ok(buf.into_vec())
}

/// Forges a single operation content, dispatching on its variant.
///
/// There is no `UnsupportedKind` branch here: by the time a caller has
/// an [`OperationContent`] at all, it has already been classified into
/// one of the closed set of kinds this crate knows how to build, so the
/// match below is exhaustive by construction.
pub fn forge_operation(content: &OperationContent) -> Result<Vec<u8>> {
    match content {
        OperationContent::Endorsement(c) => forge_endorsement(c),
        OperationContent::EndorsementWithSlot(c) => forge_endorsement_with_slot(c),
        OperationContent::ActivateAccount(c) => forge_activate_account(c),
        OperationContent::FailingNoop(c) => forge_failing_noop(c),
        OperationContent::Reveal(c) => forge_reveal(c),
        OperationContent::Transaction(c) => forge_transaction(c),
        OperationContent::Origination(c) => forge_origination(c),
        OperationContent::Delegation(c) => forge_delegation(c),
        OperationContent::RegisterGlobalConstant(c) => forge_register_global_constant(c),
        OperationContent::TransferTicket(c) => forge_transfer_ticket(c),
        OperationContent::SmartRollupAddMessages(c) => forge_smart_rollup_add_messages(c),
        OperationContent::SmartRollupExecuteOutboxMessage(c) => {
            forge_smart_rollup_execute_outbox_message(c)
        }
    }
}

/// `forge_group({branch, contents}) = base58(branch) · concat forge(content_i)`.
/// Content order is preserved verbatim, matching the order the protocol
/// expects operations to be validated and applied in.
pub fn forge_group(group: &OperationGroup) -> Result<Vec<u8>> {
    if group.contents.is_empty() {
        log::warn!("forging an operation group with zero contents");
    }
    let mut buf = Buffer::new();
    buf.extend(&decode_base58check("branch", &group.branch)?);
    for content in &group.contents {
        buf.extend(&forge_operation(content)?);
    }
    Ok(buf.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ManagerFields, Parameters};
    use tezos_codec::encode_base58check;
    use tezos_micheline::Expr;

    fn manager(source: &str) -> ManagerFields {
        ManagerFields {
            source: source.to_string(),
            fee: 0.into(),
            counter: 1.into(),
            gas_limit: 0.into(),
            storage_limit: 0.into(),
        }
    }

    /// A worked transaction scenario: tag `6c` then the manager prefix,
    /// `amount`, `destination`, and `bool(false)` for an absent
    /// `parameters` field. Reconstructs the full byte layout independently
    /// of `forge_address` to cross-check it rather than trust a single
    /// hand-derived hex literal.
    #[test]
    fn end_to_end_transaction_with_no_parameters() {
        let hash = [0xab; 20];
        let address = encode_base58check("tz1", &hash).unwrap();

        let transaction = Transaction {
            manager: manager(&address),
            amount: 0.into(),
            destination: address.clone(),
            parameters: None,
        };
        let encoded = forge_operation(&OperationContent::Transaction(transaction)).unwrap();

        let mut expected = vec![0x6c, 0x00];
        expected.extend_from_slice(&hash);
        expected.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x00]);
        expected.push(0x00);
        expected.push(0x00);
        expected.extend_from_slice(&hash);
        expected.push(0x00);

        assert_eq!(encoded, expected);
    }

    #[test]
    fn endorsement_level_one() {
        let encoded = forge_operation(&OperationContent::Endorsement(Endorsement { level: 1 }))
            .unwrap();
        assert_eq!(encoded, hex::decode("0000000001").unwrap());
    }

    #[test]
    fn transaction_with_default_unit_parameters_omits_them() {
        let hash = [0x11; 20];
        let address = encode_base58check("tz1", &hash).unwrap();

        let without = Transaction {
            manager: manager(&address),
            amount: 0.into(),
            destination: address.clone(),
            parameters: None,
        };
        let with_default_unit = Transaction {
            manager: manager(&address),
            amount: 0.into(),
            destination: address,
            parameters: Some(Parameters {
                entrypoint: "default".into(),
                value: Expr::prim("Unit"),
            }),
        };

        assert_eq!(
            forge_operation(&OperationContent::Transaction(without)).unwrap(),
            forge_operation(&OperationContent::Transaction(with_default_unit)).unwrap(),
        );
    }

    #[test]
    fn transaction_with_real_entrypoint_sets_parameters_flag() {
        let hash = [0x22; 20];
        let address = encode_base58check("tz1", &hash).unwrap();

        let transaction = Transaction {
            manager: manager(&address),
            amount: 0.into(),
            destination: address,
            parameters: Some(Parameters {
                entrypoint: "mint".into(),
                value: Expr::int(0),
            }),
        };
        let encoded = forge_operation(&OperationContent::Transaction(transaction)).unwrap();

        // tag(1) + source(21) + fee/counter/gas/storage(4) + amount(1)
        // + destination(22) = 49 bytes before the parameters-present bool.
        assert_eq!(encoded[49], 0xff);
    }

    #[test]
    fn group_assembly_concatenates_contents_in_order() {
        let branch_hash = [0x33; 32];
        let branch = encode_base58check("B", &branch_hash).unwrap();

        let group = OperationGroup {
            branch,
            contents: vec![
                OperationContent::Endorsement(Endorsement { level: 1 }),
                OperationContent::Endorsement(Endorsement { level: 2 }),
            ],
        };
        let encoded = forge_group(&group).unwrap();

        let mut expected = branch_hash.to_vec();
        expected.extend(forge_operation(&OperationContent::Endorsement(Endorsement { level: 1 })).unwrap());
        expected.extend(forge_operation(&OperationContent::Endorsement(Endorsement { level: 2 })).unwrap());
        assert_eq!(encoded, expected);
    }

    #[test]
    fn failing_noop_wraps_arbitrary_string() {
        let encoded = forge_operation(&OperationContent::FailingNoop(FailingNoop {
            arbitrary: "hello".into(),
        }))
        .unwrap();
        assert_eq!(encoded[0], 0x11);
        let len = u32::from_be_bytes(encoded[1..5].try_into().unwrap()) as usize;
        assert_eq!(&encoded[5..5 + len], b"hello");
    }

    #[test]
    fn reveal_forges_manager_prefix_then_public_key() {
        let hash = [0x44; 20];
        let source = encode_base58check("tz1", &hash).unwrap();
        let pk_bytes = [0x55; 32];
        let public_key = encode_base58check("edpk", &pk_bytes).unwrap();

        let reveal = Reveal {
            manager: manager(&source),
            public_key,
        };
        let encoded = forge_operation(&OperationContent::Reveal(reveal)).unwrap();

        let mut expected = vec![0x6b, 0x00];
        expected.extend_from_slice(&hash);
        expected.extend_from_slice(&[0x00, 0x01, 0x00, 0x00]);
        expected.push(0x00);
        expected.extend_from_slice(&pk_bytes);

        assert_eq!(encoded, expected);
    }

    #[test]
    fn origination_forges_manager_prefix_balance_delegate_and_script() {
        let hash = [0x44; 20];
        let source = encode_base58check("tz1", &hash).unwrap();

        let origination = Origination {
            manager: manager(&source),
            balance: 100.into(),
            delegate: None,
            script: Script {
                code: Expr::prim("Unit"),
                storage: Expr::int(0),
            },
        };
        let encoded = forge_operation(&OperationContent::Origination(origination)).unwrap();

        let mut expected = vec![0x6d, 0x00];
        expected.extend_from_slice(&hash);
        expected.extend_from_slice(&[0x00, 0x01, 0x00, 0x00]);
        expected.extend(forge_nat("balance", &100.into()).unwrap());
        expected.push(0x00);
        expected.extend(
            forge_array("code", &forge_micheline(&Expr::prim("Unit")).unwrap(), LenWidth::Four)
                .unwrap(),
        );
        expected.extend(
            forge_array("storage", &forge_micheline(&Expr::int(0)).unwrap(), LenWidth::Four)
                .unwrap(),
        );

        assert_eq!(encoded, expected);
    }

    #[test]
    fn delegation_sets_delegate_flag_and_address() {
        let hash = [0x55; 20];
        let source = encode_base58check("tz1", &hash).unwrap();
        let delegate_hash = [0x66; 20];
        let delegate = encode_base58check("tz1", &delegate_hash).unwrap();

        let delegation = Delegation {
            manager: manager(&source),
            delegate: Some(delegate),
        };
        let encoded = forge_operation(&OperationContent::Delegation(delegation)).unwrap();

        let mut expected = vec![0x6e, 0x00];
        expected.extend_from_slice(&hash);
        expected.extend_from_slice(&[0x00, 0x01, 0x00, 0x00]);
        expected.push(0xff);
        expected.push(0x00);
        expected.extend_from_slice(&delegate_hash);

        assert_eq!(encoded, expected);
    }

    #[test]
    fn endorsement_with_slot_wraps_inline_endorsement_and_slot() {
        let branch_hash = [0x77; 32];
        let branch = encode_base58check("B", &branch_hash).unwrap();
        let sig_bytes = [0x88; 64];
        let signature = encode_base58check("sig", &sig_bytes).unwrap();

        let content = EndorsementWithSlot {
            endorsement: InlineEndorsement {
                branch,
                level: 5,
                signature,
            },
            slot: 3,
        };
        let encoded = forge_operation(&OperationContent::EndorsementWithSlot(content)).unwrap();

        assert_eq!(encoded[0], 0x15);
        let inner_len = u32::from_be_bytes(encoded[1..5].try_into().unwrap()) as usize;
        let inner = &encoded[5..5 + inner_len];

        let mut expected_inner = branch_hash.to_vec();
        expected_inner.push(0x00);
        expected_inner.extend_from_slice(&5i32.to_be_bytes());
        expected_inner.extend_from_slice(&sig_bytes);
        assert_eq!(inner, expected_inner.as_slice());

        let slot_bytes = &encoded[5 + inner_len..];
        assert_eq!(slot_bytes, &3i16.to_be_bytes());
    }

    #[test]
    fn activate_account_decodes_pkh_and_hex_secret() {
        let hash = [0x99; 20];
        let pkh = encode_base58check("tz1", &hash).unwrap();
        let secret_hex = "0123456789abcdef0123456789abcdef01234567";

        let content = ActivateAccount {
            pkh,
            secret: secret_hex.to_string(),
        };
        let encoded = forge_operation(&OperationContent::ActivateAccount(content)).unwrap();

        let mut expected = vec![0x04];
        expected.extend_from_slice(&hash);
        expected.extend(hex::decode(secret_hex).unwrap());

        assert_eq!(encoded, expected);
    }

    #[test]
    fn register_global_constant_wraps_micheline_value() {
        let hash = [0x66; 20];
        let source = encode_base58check("tz1", &hash).unwrap();

        let content = RegisterGlobalConstant {
            manager: manager(&source),
            value: Expr::int(42),
        };
        let encoded =
            forge_operation(&OperationContent::RegisterGlobalConstant(content)).unwrap();

        let mut expected = vec![0x6f, 0x00];
        expected.extend_from_slice(&hash);
        expected.extend_from_slice(&[0x00, 0x01, 0x00, 0x00]);
        expected.extend(
            forge_array("value", &forge_micheline(&Expr::int(42)).unwrap(), LenWidth::Four)
                .unwrap(),
        );

        assert_eq!(encoded, expected);
    }

    #[test]
    fn transfer_ticket_forges_six_field_tail() {
        let hash = [0x11; 20];
        let source = encode_base58check("tz1", &hash).unwrap();
        let ticketer_hash = [0x22; 20];
        let ticketer = encode_base58check("KT1", &ticketer_hash).unwrap();
        let destination_hash = [0x33; 20];
        let destination = encode_base58check("tz1", &destination_hash).unwrap();

        let content = TransferTicket {
            manager: manager(&source),
            ticket_contents: Expr::string("abc"),
            ticket_ty: Expr::prim("string"),
            ticket_ticketer: ticketer,
            ticket_amount: 7.into(),
            destination,
            entrypoint: "default".into(),
        };
        let encoded = forge_operation(&OperationContent::TransferTicket(content)).unwrap();

        let mut expected = vec![0x9e, 0x00];
        expected.extend_from_slice(&hash);
        expected.extend_from_slice(&[0x00, 0x01, 0x00, 0x00]);
        expected.extend(
            forge_array(
                "ticket_contents",
                &forge_micheline(&Expr::string("abc")).unwrap(),
                LenWidth::Four,
            )
            .unwrap(),
        );
        expected.extend(
            forge_array(
                "ticket_ty",
                &forge_micheline(&Expr::prim("string")).unwrap(),
                LenWidth::Four,
            )
            .unwrap(),
        );
        expected.push(0x01);
        expected.extend_from_slice(&ticketer_hash);
        expected.push(0x00);
        expected.extend(forge_nat("ticket_amount", &7.into()).unwrap());
        expected.push(0x00);
        expected.push(0x00);
        expected.extend_from_slice(&destination_hash);
        expected.extend(forge_array("entrypoint", b"default", LenWidth::Four).unwrap());

        assert_eq!(encoded, expected);
    }

    #[test]
    fn smart_rollup_add_messages_nests_length_prefixes() {
        let hash = [0x77; 20];
        let source = encode_base58check("tz1", &hash).unwrap();

        let content = SmartRollupAddMessages {
            manager: manager(&source),
            message: vec!["ab".into(), "cdef".into()],
        };
        let encoded =
            forge_operation(&OperationContent::SmartRollupAddMessages(content)).unwrap();

        let mut inner = Vec::new();
        inner.extend(
            forge_array("message[]", &hex::decode("ab").unwrap(), LenWidth::Four).unwrap(),
        );
        inner.extend(
            forge_array("message[]", &hex::decode("cdef").unwrap(), LenWidth::Four).unwrap(),
        );

        let mut expected = vec![0xc9, 0x00];
        expected.extend_from_slice(&hash);
        expected.extend_from_slice(&[0x00, 0x01, 0x00, 0x00]);
        expected.extend(forge_array("message", &inner, LenWidth::Four).unwrap());

        assert_eq!(encoded, expected);
    }

    #[test]
    fn smart_rollup_execute_outbox_message_forges_rollup_commitment_and_proof() {
        let hash = [0x88; 20];
        let source = encode_base58check("tz1", &hash).unwrap();
        let rollup_hash = [0x99; 20];
        let rollup = encode_base58check("sr1", &rollup_hash).unwrap();
        let commitment_hash = [0xaa; 32];
        let cemented_commitment = encode_base58check("src1", &commitment_hash).unwrap();
        let proof_hex = "deadbeef";

        let content = SmartRollupExecuteOutboxMessage {
            manager: manager(&source),
            rollup,
            cemented_commitment,
            output_proof: proof_hex.to_string(),
        };
        let encoded = forge_operation(&OperationContent::SmartRollupExecuteOutboxMessage(
            content,
        ))
        .unwrap();

        let mut expected = vec![0xce, 0x00];
        expected.extend_from_slice(&hash);
        expected.extend_from_slice(&[0x00, 0x01, 0x00, 0x00]);
        expected.extend_from_slice(&rollup_hash);
        expected.extend_from_slice(&commitment_hash);
        expected.extend(
            forge_array("output_proof", &hex::decode(proof_hex).unwrap(), LenWidth::Four)
                .unwrap(),
        );

        assert_eq!(encoded, expected);
    }
}
