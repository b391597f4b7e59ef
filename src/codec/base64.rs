use base64::engine::general_purpose;
use base64::{Engine as _, engine::GeneralPurpose};

use super::Codec;
use crate::error::{BinpipeError, Result};

/// Base64 encoding schemes determining the character set and padding used.
/// `Standard` uses the RFC 4648 alphabet with padding characters, `UrlSafe`
/// uses the RFC 4648 alternate alphabet that is safe for filenames and URLs.
/// The `Raw` variants omit the padding characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Base64Scheme {
    #[default]
    Standard,
    RawStandard,
    UrlSafe,
    RawUrlSafe,
}

impl Base64Scheme {
    fn engine(&self) -> &'static GeneralPurpose {
        match self {
            Self::Standard => &general_purpose::STANDARD,
            Self::RawStandard => &general_purpose::STANDARD_NO_PAD,
            Self::UrlSafe => &general_purpose::URL_SAFE,
            Self::RawUrlSafe => &general_purpose::URL_SAFE_NO_PAD,
        }
    }
}

/// Codec for base64 data and strings. Base64 is either an initial decoder or
/// a final encoder and is not useful for intermediate binary representations.
///
/// The scheme determines the alphabet and padding rule for both directions:
/// a string produced under one scheme does not decode under another whenever
/// their alphabets or padding differ.
#[derive(Debug, Clone, Default)]
pub struct Base64 {
    scheme: Base64Scheme,
    data: Option<Vec<u8>>,
}

impl Base64 {
    pub fn new(scheme: Base64Scheme) -> Self {
        Self { scheme, data: None }
    }
}

impl Codec for Base64 {
    fn decode_binary(&self, data: &[u8]) -> Result<Box<dyn Codec>> {
        Ok(Box::new(Self {
            scheme: self.scheme,
            data: Some(data.to_vec()),
        }))
    }

    fn decode_string(&self, data: &str) -> Result<Box<dyn Codec>> {
        let decoded = self.scheme.engine().decode(data)?;
        self.decode_binary(&decoded)
    }

    fn encode_binary(&self) -> Result<Vec<u8>> {
        self.data.clone().ok_or(BinpipeError::NoData)
    }

    fn encode_string(&self) -> Result<String> {
        let data = self.data.as_deref().ok_or(BinpipeError::NoData)?;
        Ok(self.scheme.engine().encode(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_alphabets() {
        // 0xff 0xff 0xfe exercises both characters that differ between the
        // standard and url-safe alphabets.
        let data = [0xffu8, 0xff, 0xfe];

        let std = Base64::new(Base64Scheme::Standard);
        let view = std.decode_binary(&data).unwrap();
        assert_eq!(view.encode_string().unwrap(), "///+");

        let url = Base64::new(Base64Scheme::UrlSafe);
        let view = url.decode_binary(&data).unwrap();
        assert_eq!(view.encode_string().unwrap(), "___-");

        // Wrong alphabet must fail, not silently decode.
        assert!(std.decode_string("___-").is_err());
        assert!(url.decode_string("///+").is_err());
    }

    #[test]
    fn padding_rules() {
        let data = [1u8, 2, 3, 4, 5];

        let padded = Base64::new(Base64Scheme::Standard);
        let raw = Base64::new(Base64Scheme::RawStandard);

        let with_pad = padded.decode_binary(&data).unwrap().encode_string().unwrap();
        let without_pad = raw.decode_binary(&data).unwrap().encode_string().unwrap();
        assert_eq!(with_pad, "AQIDBAU=");
        assert_eq!(without_pad, "AQIDBAU");

        // The raw scheme rejects padded input and vice versa.
        assert!(raw.decode_string(&with_pad).is_err());
        assert!(padded.decode_string(&without_pad).is_err());
    }

    #[test]
    fn no_data_until_decoded() {
        let codec = Base64::new(Base64Scheme::Standard);
        assert!(matches!(codec.encode_binary(), Err(BinpipeError::NoData)));
        assert!(matches!(codec.encode_string(), Err(BinpipeError::NoData)));

        // Zero-length payload is data, not absence of data.
        let view = codec.decode_binary(&[]).unwrap();
        assert_eq!(view.encode_binary().unwrap(), Vec::<u8>::new());
        assert_eq!(view.encode_string().unwrap(), "");
    }
}
