use tezos_codec::BigInt;

/// A Micheline expression: the recursive wire syntax for Michelson values,
/// scripts, and data.
///
/// An annotation is any string beginning with `@`, `:`, `%`, or `?`; an
/// empty annotation list is equivalent to no annotations at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Int(BigInt),
    String(String),
    Bytes(Vec<u8>),
    Prim {
        name: String,
        args: Vec<Expr>,
        annots: Vec<String>,
    },
    Seq(Vec<Expr>),
}

impl Expr {
    pub fn int(n: impl Into<BigInt>) -> Self {
        Expr::Int(n.into())
    }

    pub fn string(s: impl Into<String>) -> Self {
        Expr::String(s.into())
    }

    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Expr::Bytes(b.into())
    }

    pub fn prim(name: impl Into<String>) -> Self {
        Expr::Prim {
            name: name.into(),
            args: Vec::new(),
            annots: Vec::new(),
        }
    }

    pub fn prim_with(name: impl Into<String>, args: Vec<Expr>, annots: Vec<String>) -> Self {
        Expr::Prim {
            name: name.into(),
            args,
            annots,
        }
    }

    pub fn seq(items: Vec<Expr>) -> Self {
        Expr::Seq(items)
    }

    /// The canonical `{prim: "Unit"}` value used to detect a no-op
    /// transaction parameter: a `default` entrypoint call carrying a bare
    /// `Unit` is indistinguishable on the wire from omitting `parameters`
    /// entirely.
    pub fn is_unit(&self) -> bool {
        matches!(
            self,
            Expr::Prim { name, args, annots } if name == "Unit" && args.is_empty() && annots.is_empty()
        )
    }
}
