//! `serde::Deserialize`/`Serialize` for [`Expr`], mapping the JSON Micheline
//! representation used by the Tezos RPC interface (`{"int": ...}`,
//! `{"string": ...}`, `{"bytes": ...}`, `{"prim": ..., "args": ..., "annots":
//! ...}`) onto this crate's typed expression tree.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::expr::Expr;

impl Serialize for Expr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Expr {
    fn deserialize<D>(deserializer: D) -> Result<Expr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Expr::from_value(&value).map_err(D::Error::custom)
    }
}

impl Expr {
    fn to_value(&self) -> Value {
        match self {
            Expr::Int(n) => serde_json::json!({ "int": n.to_string() }),
            Expr::String(s) => serde_json::json!({ "string": s }),
            Expr::Bytes(b) => serde_json::json!({ "bytes": hex::encode(b) }),
            Expr::Seq(items) => {
                Value::Array(items.iter().map(Expr::to_value).collect())
            }
            Expr::Prim { name, args, annots } => {
                let mut map = serde_json::Map::new();
                map.insert("prim".into(), Value::String(name.clone()));
                if !args.is_empty() {
                    map.insert(
                        "args".into(),
                        Value::Array(args.iter().map(Expr::to_value).collect()),
                    );
                }
                if !annots.is_empty() {
                    map.insert(
                        "annots".into(),
                        Value::Array(annots.iter().cloned().map(Value::String).collect()),
                    );
                }
                Value::Object(map)
            }
        }
    }

    fn from_value(value: &Value) -> Result<Expr, String> {
        match value {
            Value::Array(items) => Ok(Expr::Seq(
                items
                    .iter()
                    .map(Expr::from_value)
                    .collect::<Result<_, _>>()?,
            )),
            Value::Object(map) => {
                if let Some(Value::String(n)) = map.get("int") {
                    let n = n
                        .parse()
                        .map_err(|_| format!("invalid micheline int: {n}"))?;
                    return Ok(Expr::Int(n));
                }
                if let Some(Value::String(s)) = map.get("string") {
                    return Ok(Expr::String(s.clone()));
                }
                if let Some(Value::String(h)) = map.get("bytes") {
                    let bytes = hex::decode(h)
                        .map_err(|_| format!("invalid micheline bytes hex: {h}"))?;
                    return Ok(Expr::Bytes(bytes));
                }
                if let Some(Value::String(name)) = map.get("prim") {
                    let args = match map.get("args") {
                        Some(Value::Array(items)) => items
                            .iter()
                            .map(Expr::from_value)
                            .collect::<Result<_, _>>()?,
                        Some(_) => return Err("micheline `args` must be an array".into()),
                        None => Vec::new(),
                    };
                    let annots = match map.get("annots") {
                        Some(Value::Array(items)) => items
                            .iter()
                            .map(|v| {
                                v.as_str()
                                    .map(str::to_owned)
                                    .ok_or_else(|| "micheline annots must be strings".to_string())
                            })
                            .collect::<Result<_, _>>()?,
                        Some(_) => return Err("micheline `annots` must be an array".into()),
                        None => Vec::new(),
                    };
                    return Ok(Expr::Prim {
                        name: name.clone(),
                        args,
                        annots,
                    });
                }
                Err("unrecognized micheline expression shape".into())
            }
            other => Err(format!("unrecognized micheline expression shape: {other}")),
        }
    }
}
