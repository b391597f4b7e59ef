//! Pipeline composition for chaining codecs
//!
//! A pipeline is an ordered, immutable-after-construction chain of codecs.
//! Binary data is the currency between steps: every codec can represent its
//! payload as bytes, but not every codec has a meaningful string form mid
//! pipeline, so string conversion only happens at the pipeline boundaries.

use crate::codec::Codec;
use crate::error::{BinpipeError, Result};
use crate::registry;

/// A single pipeline step: either a registered codec name resolved during
/// construction, or an already-constructed codec instance.
#[derive(Debug)]
pub enum Step {
    Name(String),
    Codec(Box<dyn Codec>),
}

impl Step {
    fn resolve(self) -> Result<Box<dyn Codec>> {
        match self {
            Self::Name(name) => registry::new_codec(&name),
            Self::Codec(codec) => Ok(codec),
        }
    }
}

impl From<&str> for Step {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Step {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Box<dyn Codec>> for Step {
    fn from(codec: Box<dyn Codec>) -> Self {
        Self::Codec(codec)
    }
}

/// An ordered chain of codecs through which data is progressively decoded
/// and re-encoded to move between representations.
#[derive(Debug)]
pub struct Pipeline {
    steps: Vec<Box<dyn Codec>>,
}

impl Pipeline {
    /// Construct a pipeline from a sequence of steps, resolving names
    /// through the process-wide registry. Construction fails fast on the
    /// first name that does not resolve.
    pub fn new<I, S>(steps: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Step>,
    {
        let mut resolved = Vec::new();
        for step in steps {
            resolved.push(step.into().resolve()?);
        }
        Ok(Self { steps: resolved })
    }

    /// Get the number of steps in the pipeline
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the pipeline has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn check_not_empty(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(BinpipeError::EmptyPipeline);
        }
        Ok(())
    }

    /// Transform binary input data into binary output data: every step
    /// decodes the current bytes and re-encodes them to binary for the next.
    pub fn bin_to_bin(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.check_not_empty()?;
        let mut data = input.to_vec();
        for (index, step) in self.steps.iter().enumerate() {
            data = step
                .decode_binary(&data)
                .and_then(|view| view.encode_binary())
                .map_err(|err| err.at_step(index))?;
        }
        Ok(data)
    }

    /// Transform binary input data into a string representation: identical
    /// to [`Pipeline::bin_to_bin`] except that the final step produces its
    /// string encoding.
    pub fn bin_to_str(&self, input: &[u8]) -> Result<String> {
        self.check_not_empty()?;
        let last = self.steps.len() - 1;
        let mut data = input.to_vec();
        for (index, step) in self.steps.iter().take(last).enumerate() {
            data = step
                .decode_binary(&data)
                .and_then(|view| view.encode_binary())
                .map_err(|err| err.at_step(index))?;
        }
        self.steps[last]
            .decode_binary(&data)
            .and_then(|view| view.encode_string())
            .map_err(|err| err.at_step(last))
    }

    /// Transform a string representation into binary output data: the first
    /// step parses the string, every step re-encodes to binary.
    pub fn str_to_bin(&self, input: &str) -> Result<Vec<u8>> {
        self.check_not_empty()?;
        let mut data = self.steps[0]
            .decode_string(input)
            .and_then(|view| view.encode_binary())
            .map_err(|err| err.at_step(0))?;
        for (index, step) in self.steps.iter().enumerate().skip(1) {
            data = step
                .decode_binary(&data)
                .and_then(|view| view.encode_binary())
                .map_err(|err| err.at_step(index))?;
        }
        Ok(data)
    }

    /// Transform a string representation into a different string
    /// representation. A single-step pipeline returns that step's string
    /// encoding directly with no binary round trip, preserving any
    /// string-only projection; otherwise binary bridges adjacent steps and
    /// the last step produces the final string.
    pub fn str_to_str(&self, input: &str) -> Result<String> {
        self.check_not_empty()?;
        let last = self.steps.len() - 1;
        let mut view = self.steps[0]
            .decode_string(input)
            .map_err(|err| err.at_step(0))?;
        for (index, step) in self.steps.iter().enumerate().skip(1) {
            let data = view.encode_binary().map_err(|err| err.at_step(index - 1))?;
            view = step
                .decode_binary(&data)
                .map_err(|err| err.at_step(index))?;
        }
        view.encode_string().map_err(|err| err.at_step(last))
    }
}
