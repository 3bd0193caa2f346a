use thiserror::Error;

/// Truncates a diagnostic value so error messages stay short and safe to log.
pub(crate) fn truncate(value: impl std::fmt::Display) -> String {
    let s = value.to_string();
    if s.len() > 64 {
        format!("{}…", &s[..64])
    } else {
        s
    }
}

/// Failure kinds raised by the forger's primitive encoders.
///
/// Every variant aborts the current call; none produce a partial byte
/// string. Messages carry the offending field name and a truncated value
/// for diagnostic use.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument for `{field}`: {value}")]
    InvalidArgument { field: &'static str, value: String },

    #[error("base58check checksum mismatch for `{field}`: {value}")]
    InvalidChecksum { field: &'static str, value: String },

    #[error("unknown base58 prefix for `{field}`: {value}")]
    UnknownPrefix { field: &'static str, value: String },

    #[error("array payload for `{field}` overflows its {len_bytes}-byte length prefix ({len} bytes)")]
    OverflowLength {
        field: &'static str,
        len_bytes: u8,
        len: usize,
    },
}

impl Error {
    pub fn invalid_argument(field: &'static str, value: impl std::fmt::Display) -> Self {
        Error::InvalidArgument {
            field,
            value: truncate(value),
        }
    }

    pub fn invalid_checksum(field: &'static str, value: impl std::fmt::Display) -> Self {
        Error::InvalidChecksum {
            field,
            value: truncate(value),
        }
    }

    pub fn unknown_prefix(field: &'static str, value: impl std::fmt::Display) -> Self {
        Error::UnknownPrefix {
            field,
            value: truncate(value),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
