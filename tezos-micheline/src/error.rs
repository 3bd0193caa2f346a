use thiserror::Error;

/// Failure kinds raised by the Micheline encoder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown Michelson primitive: {0}")]
    UnknownPrim(String),

    #[error(transparent)]
    Codec(#[from] tezos_codec::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
