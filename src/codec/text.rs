use std::fmt;

use encoding_rs::{Encoding, mem};

use super::Codec;
use crate::error::{BinpipeError, Result};

/// Text charsets to convert to and from. UTF-8 and ASCII text passes through
/// as raw bytes with no transcoding. Every other charset is decoded into
/// UTF-8 on the way into a pipeline and transcoded back out of UTF-8 when the
/// string form is requested.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Ascii,
    /// True ISO-8859-1: every byte maps to the code point of the same value.
    /// Not the WHATWG "latin1" label, which aliases windows-1252.
    Latin1,
    /// Any other charset, resolved through its WHATWG label at call time.
    /// An unrecognized label is an error, never a silent default.
    Charset(String),
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => write!(f, "utf-8"),
            Self::Ascii => write!(f, "ascii"),
            Self::Latin1 => write!(f, "latin1"),
            Self::Charset(label) => write!(f, "{label}"),
        }
    }
}

/// Codec for plain text in a named charset. The canonical payload is always
/// UTF-8 bytes regardless of the source charset.
#[derive(Debug, Clone, Default)]
pub struct Text {
    encoding: TextEncoding,
    data: Option<Vec<u8>>,
}

impl Text {
    pub fn new(encoding: TextEncoding) -> Self {
        Self {
            encoding,
            data: None,
        }
    }

    /// Create a text codec for an arbitrary charset label, e.g. "shift_jis".
    pub fn with_charset(label: impl Into<String>) -> Self {
        Self::new(TextEncoding::Charset(label.into()))
    }

    fn resolve(label: &str) -> Result<&'static Encoding> {
        Encoding::for_label(label.as_bytes())
            .ok_or_else(|| BinpipeError::UnknownCharset(label.to_string()))
    }

    fn view(&self, data: Vec<u8>) -> Box<dyn Codec> {
        Box::new(Self {
            encoding: self.encoding.clone(),
            data: Some(data),
        })
    }
}

impl Codec for Text {
    fn decode_binary(&self, data: &[u8]) -> Result<Box<dyn Codec>> {
        Ok(self.view(data.to_vec()))
    }

    fn decode_string(&self, data: &str) -> Result<Box<dyn Codec>> {
        let payload = match &self.encoding {
            TextEncoding::Utf8 | TextEncoding::Ascii => data.as_bytes().to_vec(),
            TextEncoding::Latin1 => mem::decode_latin1(data.as_bytes()).into_owned().into_bytes(),
            TextEncoding::Charset(label) => {
                let charset = Self::resolve(label)?;
                charset
                    .decode_without_bom_handling_and_without_replacement(data.as_bytes())
                    .ok_or_else(|| BinpipeError::CharsetDecode(label.clone()))?
                    .into_owned()
                    .into_bytes()
            }
        };
        Ok(self.view(payload))
    }

    fn encode_binary(&self) -> Result<Vec<u8>> {
        self.data.clone().ok_or(BinpipeError::NoData)
    }

    fn encode_string(&self) -> Result<String> {
        let data = self.data.as_deref().ok_or(BinpipeError::NoData)?;
        let text = std::str::from_utf8(data)
            .map_err(|_| BinpipeError::CharsetEncode(self.encoding.to_string()))?;

        match &self.encoding {
            TextEncoding::Utf8 | TextEncoding::Ascii => Ok(text.to_string()),
            TextEncoding::Latin1 => {
                if !mem::is_str_latin1(text) {
                    return Err(BinpipeError::CharsetEncode(self.encoding.to_string()));
                }
                let mut bytes = vec![0u8; text.len()];
                let written = mem::convert_utf8_to_latin1_lossy(text.as_bytes(), &mut bytes);
                bytes.truncate(written);
                String::from_utf8(bytes)
                    .map_err(|_| BinpipeError::CharsetEncode(self.encoding.to_string()))
            }
            TextEncoding::Charset(label) => {
                let charset = Self::resolve(label)?;
                let (bytes, _, unmappable) = charset.encode(text);
                if unmappable {
                    return Err(BinpipeError::CharsetEncode(label.clone()));
                }
                String::from_utf8(bytes.into_owned())
                    .map_err(|_| BinpipeError::CharsetEncode(label.clone()))
            }
        }
    }
}
