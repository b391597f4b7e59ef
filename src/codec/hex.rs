use super::Codec;
use crate::error::{BinpipeError, Result};

/// Codec for lowercase hexadecimal strings. Decoding requires an even number
/// of hex digits; encoding always produces lowercase digit pairs.
#[derive(Debug, Clone, Default)]
pub struct Hex {
    data: Option<Vec<u8>>,
}

impl Hex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Codec for Hex {
    fn decode_binary(&self, data: &[u8]) -> Result<Box<dyn Codec>> {
        Ok(Box::new(Self {
            data: Some(data.to_vec()),
        }))
    }

    fn decode_string(&self, data: &str) -> Result<Box<dyn Codec>> {
        let decoded = hex::decode(data)?;
        self.decode_binary(&decoded)
    }

    fn encode_binary(&self) -> Result<Vec<u8>> {
        self.data.clone().ok_or(BinpipeError::NoData)
    }

    fn encode_string(&self) -> Result<String> {
        let data = self.data.as_deref().ok_or(BinpipeError::NoData)?;
        Ok(hex::encode(data))
    }
}
