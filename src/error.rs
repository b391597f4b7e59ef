/// Unified error type for binpipe
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BinpipeError {
    // Pipeline construction and dispatch errors
    #[error("the pipeline has no transformation steps")]
    EmptyPipeline,

    #[error("no registered codec named {0:?}")]
    UnknownCodec(String),

    #[error("no pipeline named {0:?}")]
    UnknownPipeline(String),

    /// A conversion step failed; carries the zero-based step index.
    #[error("step {index}: {source}")]
    Step {
        index: usize,
        source: Box<BinpipeError>,
    },

    // Encode errors
    #[error("no data has been decoded")]
    NoData,

    #[error("unknown charset {0:?}")]
    UnknownCharset(String),

    #[error("input is not valid {0}")]
    CharsetDecode(String),

    #[error("text cannot be represented as {0}")]
    CharsetEncode(String),

    // Decode errors propagated from the underlying format parsers
    #[error("invalid base64 string: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid hex string: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("invalid uuid: {0}")]
    Uuid(#[from] uuid::Error),

    #[error("invalid ulid: {0}")]
    Ulid(#[from] ulid::DecodeError),

    #[error("ulid requires exactly 16 bytes, got {0}")]
    UlidLength(usize),

    // CLI errors
    #[error("{0}")]
    Usage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using BinpipeError
pub type Result<T> = std::result::Result<T, BinpipeError>;

impl BinpipeError {
    /// Wrap the error with the zero-based index of the pipeline step it
    /// originated from.
    pub fn at_step(self, index: usize) -> Self {
        Self::Step {
            index,
            source: Box::new(self),
        }
    }

    /// Create a usage error
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}
