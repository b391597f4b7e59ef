use super::Codec;
use crate::error::{BinpipeError, Result};

/// Codec for RFC 4122 UUIDs: 16 bytes of binary data or the hyphenated
/// 36-character text form. Binary input of any other length is a decode
/// error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uuid {
    value: Option<uuid::Uuid>,
}

impl Uuid {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Codec for Uuid {
    fn decode_binary(&self, data: &[u8]) -> Result<Box<dyn Codec>> {
        let value = uuid::Uuid::from_slice(data)?;
        Ok(Box::new(Self { value: Some(value) }))
    }

    fn decode_string(&self, data: &str) -> Result<Box<dyn Codec>> {
        let value = uuid::Uuid::parse_str(data)?;
        Ok(Box::new(Self { value: Some(value) }))
    }

    fn encode_binary(&self) -> Result<Vec<u8>> {
        let value = self.value.ok_or(BinpipeError::NoData)?;
        Ok(value.as_bytes().to_vec())
    }

    fn encode_string(&self) -> Result<String> {
        let value = self.value.ok_or(BinpipeError::NoData)?;
        Ok(value.to_string())
    }
}
