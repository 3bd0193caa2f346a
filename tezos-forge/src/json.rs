//! `serde::Deserialize` for [`OperationContent`] and [`OperationGroup`],
//! dispatching on the `kind` field the way the Tezos RPC's operation JSON
//! names it. Numeric fields accept either a JSON number or a decimal
//! string, since mutez amounts and counters can exceed 2^53 and the Tezos
//! RPC itself transmits them as decimal strings for exactly that reason.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::content::{
    ActivateAccount, Delegation, Endorsement, EndorsementWithSlot, FailingNoop,
    InlineEndorsement, ManagerFields, OperationContent, OperationGroup, Origination, Parameters,
    RegisterGlobalConstant, Reveal, Script, SmartRollupAddMessages,
    SmartRollupExecuteOutboxMessage, Transaction, TransferTicket,
};
use tezos_codec::BigInt;
use tezos_micheline::Expr;

fn field<'a>(map: &'a serde_json::Map<String, Value>, name: &str) -> Result<&'a Value, String> {
    map.get(name)
        .ok_or_else(|| format!("missing field `{name}`"))
}

fn as_str(value: &Value, name: &str) -> Result<String, String> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| format!("field `{name}` must be a string"))
}

fn as_bigint(value: &Value, name: &str) -> Result<BigInt, String> {
    match value {
        Value::String(s) => s.parse().map_err(|_| format!("field `{name}` is not a valid integer: {s}")),
        Value::Number(n) => n
            .to_string()
            .parse()
            .map_err(|_| format!("field `{name}` is not a valid integer: {n}")),
        _ => Err(format!("field `{name}` must be a number or decimal string")),
    }
}

fn as_i32(value: &Value, name: &str) -> Result<i32, String> {
    use num_traits::ToPrimitive;
    as_bigint(value, name)?
        .to_i32()
        .ok_or_else(|| format!("field `{name}` does not fit in i32"))
}

fn as_i16(value: &Value, name: &str) -> Result<i16, String> {
    use num_traits::ToPrimitive;
    as_bigint(value, name)?
        .to_i16()
        .ok_or_else(|| format!("field `{name}` does not fit in i16"))
}

fn manager_fields(map: &serde_json::Map<String, Value>) -> Result<ManagerFields, String> {
    Ok(ManagerFields {
        source: as_str(field(map, "source")?, "source")?,
        fee: as_bigint(field(map, "fee")?, "fee")?,
        counter: as_bigint(field(map, "counter")?, "counter")?,
        gas_limit: as_bigint(field(map, "gas_limit")?, "gas_limit")?,
        storage_limit: as_bigint(field(map, "storage_limit")?, "storage_limit")?,
    })
}

fn optional_delegate(map: &serde_json::Map<String, Value>) -> Result<Option<String>, String> {
    match map.get("delegate") {
        Some(Value::Null) | None => Ok(None),
        Some(v) => Ok(Some(as_str(v, "delegate")?)),
    }
}

fn parse_expr(value: &Value, name: &str) -> Result<Expr, String> {
    serde_json::from_value(value.clone()).map_err(|e| format!("field `{name}`: {e}"))
}

fn parameters(map: &serde_json::Map<String, Value>) -> Result<Option<Parameters>, String> {
    match map.get("parameters") {
        Some(Value::Null) | None => Ok(None),
        Some(Value::Object(p)) => Ok(Some(Parameters {
            entrypoint: as_str(field(p, "entrypoint")?, "parameters.entrypoint")?,
            value: parse_expr(field(p, "value")?, "parameters.value")?,
        })),
        Some(_) => Err("field `parameters` must be an object".into()),
    }
}

fn content_from_map(map: &serde_json::Map<String, Value>) -> Result<OperationContent, String> {
    let kind = as_str(field(map, "kind")?, "kind")?;

    Ok(match kind.as_str() {
        "reveal" => OperationContent::Reveal(Reveal {
            manager: manager_fields(map)?,
            public_key: as_str(field(map, "public_key")?, "public_key")?,
        }),
        "transaction" => OperationContent::Transaction(Transaction {
            manager: manager_fields(map)?,
            amount: as_bigint(field(map, "amount")?, "amount")?,
            destination: as_str(field(map, "destination")?, "destination")?,
            parameters: parameters(map)?,
        }),
        "origination" => OperationContent::Origination(Origination {
            manager: manager_fields(map)?,
            balance: as_bigint(field(map, "balance")?, "balance")?,
            delegate: optional_delegate(map)?,
            script: {
                let script = field(map, "script")?
                    .as_object()
                    .ok_or_else(|| "field `script` must be an object".to_string())?;
                Script {
                    code: parse_expr(field(script, "code")?, "script.code")?,
                    storage: parse_expr(field(script, "storage")?, "script.storage")?,
                }
            },
        }),
        "delegation" => OperationContent::Delegation(Delegation {
            manager: manager_fields(map)?,
            delegate: optional_delegate(map)?,
        }),
        "endorsement" => OperationContent::Endorsement(Endorsement {
            level: as_i32(field(map, "level")?, "level")?,
        }),
        "endorsement_with_slot" => {
            let endorsement = field(map, "endorsement")?
                .as_object()
                .ok_or_else(|| "field `endorsement` must be an object".to_string())?;
            let branch = as_str(field(endorsement, "branch")?, "endorsement.branch")?;
            let operations = field(endorsement, "operations")?
                .as_object()
                .ok_or_else(|| "field `endorsement.operations` must be an object".to_string())?;
            let level = as_i32(field(operations, "level")?, "endorsement.operations.level")?;
            let signature = as_str(field(endorsement, "signature")?, "endorsement.signature")?;
            OperationContent::EndorsementWithSlot(EndorsementWithSlot {
                endorsement: InlineEndorsement {
                    branch,
                    level,
                    signature,
                },
                slot: as_i16(field(map, "slot")?, "slot")?,
            })
        }
        "activate_account" => OperationContent::ActivateAccount(ActivateAccount {
            pkh: as_str(field(map, "pkh")?, "pkh")?,
            secret: as_str(field(map, "secret")?, "secret")?,
        }),
        "failing_noop" => OperationContent::FailingNoop(FailingNoop {
            arbitrary: as_str(field(map, "arbitrary")?, "arbitrary")?,
        }),
        "register_global_constant" => {
            OperationContent::RegisterGlobalConstant(RegisterGlobalConstant {
                manager: manager_fields(map)?,
                value: parse_expr(field(map, "value")?, "value")?,
            })
        }
        "transfer_ticket" => OperationContent::TransferTicket(TransferTicket {
            manager: manager_fields(map)?,
            ticket_contents: parse_expr(field(map, "ticket_contents")?, "ticket_contents")?,
            ticket_ty: parse_expr(field(map, "ticket_ty")?, "ticket_ty")?,
            ticket_ticketer: as_str(field(map, "ticket_ticketer")?, "ticket_ticketer")?,
            ticket_amount: as_bigint(field(map, "ticket_amount")?, "ticket_amount")?,
            destination: as_str(field(map, "destination")?, "destination")?,
            entrypoint: as_str(field(map, "entrypoint")?, "entrypoint")?,
        }),
        "smart_rollup_add_messages" => {
            let messages = field(map, "message")?
                .as_array()
                .ok_or_else(|| "field `message` must be an array".to_string())?;
            OperationContent::SmartRollupAddMessages(SmartRollupAddMessages {
                manager: manager_fields(map)?,
                message: messages
                    .iter()
                    .map(|m| as_str(m, "message[]"))
                    .collect::<Result<_, _>>()?,
            })
        }
        "smart_rollup_execute_outbox_message" => {
            OperationContent::SmartRollupExecuteOutboxMessage(SmartRollupExecuteOutboxMessage {
                manager: manager_fields(map)?,
                rollup: as_str(field(map, "rollup")?, "rollup")?,
                cemented_commitment: as_str(
                    field(map, "cemented_commitment")?,
                    "cemented_commitment",
                )?,
                output_proof: as_str(field(map, "output_proof")?, "output_proof")?,
            })
        }
        other => return Err(format!("unsupported operation kind: {other}")),
    })
}

impl<'de> Deserialize<'de> for OperationContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let map = value
            .as_object()
            .ok_or_else(|| D::Error::custom("operation content must be a JSON object"))?;
        content_from_map(map).map_err(D::Error::custom)
    }
}

impl<'de> Deserialize<'de> for OperationGroup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let map = value
            .as_object()
            .ok_or_else(|| D::Error::custom("operation group must be a JSON object"))?;
        let branch = as_str(field(map, "branch").map_err(D::Error::custom)?, "branch")
            .map_err(D::Error::custom)?;
        let contents = field(map, "contents")
            .map_err(D::Error::custom)?
            .as_array()
            .ok_or_else(|| D::Error::custom("field `contents` must be an array"))?
            .iter()
            .map(|v| {
                let m = v
                    .as_object()
                    .ok_or_else(|| "operation content must be a JSON object".to_string())?;
                content_from_map(m)
            })
            .collect::<Result<_, _>>()
            .map_err(D::Error::custom)?;
        Ok(OperationGroup { branch, contents })
    }
}
