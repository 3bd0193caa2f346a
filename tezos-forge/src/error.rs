use thiserror::Error;

/// Errors raised while forging an operation content or an operation group.
#[derive(Debug, Error)]
pub enum Error {
    /// `content.kind` named something outside the dispatch table in
    /// [`crate::tags`]. Caught at construction time when parsing into
    /// [`crate::OperationContent`], so this variant is effectively
    /// unreachable past that boundary — kept here because the table
    /// itself is data, not an exhaustive match.
    #[error("unsupported operation kind: {0}")]
    UnsupportedKind(String),

    #[error(transparent)]
    Codec(#[from] tezos_codec::Error),

    #[error(transparent)]
    Micheline(#[from] tezos_micheline::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
