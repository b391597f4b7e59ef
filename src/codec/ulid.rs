use super::Codec;
use crate::error::{BinpipeError, Result};

/// Codec for ULIDs: 16 bytes of binary data (a 48-bit timestamp followed by
/// 80 bits of randomness, treated here as opaque bytes) or the 26-character
/// Crockford base32 text form. Parsing is strict: characters outside the
/// Crockford alphabet are rejected rather than substituted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ulid {
    value: Option<ulid::Ulid>,
}

impl Ulid {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Codec for Ulid {
    fn decode_binary(&self, data: &[u8]) -> Result<Box<dyn Codec>> {
        let bytes: [u8; 16] = data
            .try_into()
            .map_err(|_| BinpipeError::UlidLength(data.len()))?;
        let value = ulid::Ulid(u128::from_be_bytes(bytes));
        Ok(Box::new(Self { value: Some(value) }))
    }

    fn decode_string(&self, data: &str) -> Result<Box<dyn Codec>> {
        let value = ulid::Ulid::from_string(data)?;
        Ok(Box::new(Self { value: Some(value) }))
    }

    fn encode_binary(&self) -> Result<Vec<u8>> {
        let value = self.value.ok_or(BinpipeError::NoData)?;
        Ok(value.0.to_be_bytes().to_vec())
    }

    fn encode_string(&self) -> Result<String> {
        let value = self.value.ok_or(BinpipeError::NoData)?;
        Ok(value.to_string())
    }
}
