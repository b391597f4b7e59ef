//! Codec implementations for binary and string representations

pub mod base64;
pub mod hex;
pub mod text;
pub mod ulid;
pub mod uuid;

pub use self::base64::{Base64, Base64Scheme};
pub use self::hex::Hex;
pub use self::text::{Text, TextEncoding};
pub use self::ulid::Ulid;
pub use self::uuid::Uuid;

use crate::error::Result;

/// A codec can unmarshal itself from either a binary or string representation
/// and marshal the data it holds back out to both forms. For example a UUID is
/// 16 bytes of binary data or a hyphenated GUID string. Some formats are
/// string-first (text is simply UTF-8 bytes), others are binary-first (raw
/// bytes whose string form is a base64 or hex projection).
///
/// Decoding is not mutation: both decode operations return a fresh view that
/// holds the canonical binary payload, leaving the receiver untouched. A codec
/// created directly (e.g. by the registry) holds no payload and both encode
/// operations fail with a no-data error until a decode has produced a
/// populated view. A zero-length payload is data: it encodes to an empty
/// string or slice.
pub trait Codec: Send + Sync + std::fmt::Debug {
    /// Wrap raw bytes as the canonical payload, returning a new view.
    fn decode_binary(&self, data: &[u8]) -> Result<Box<dyn Codec>>;

    /// Parse the textual form into the canonical payload, returning a new view.
    fn decode_string(&self, data: &str) -> Result<Box<dyn Codec>>;

    /// Return the canonical binary payload.
    fn encode_binary(&self) -> Result<Vec<u8>>;

    /// Return the designated textual projection of the payload.
    fn encode_string(&self) -> Result<String>;
}
