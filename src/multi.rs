//! Multi-pipeline: encode the same input several ways
//!
//! A named collection of independently constructed single-step pipelines,
//! used when one value needs to be shown in several representations at once
//! (e.g. pretty-printing a freshly generated identifier as hex and base64).

use indexmap::IndexMap;

use crate::error::{BinpipeError, Result};
use crate::pipeline::Pipeline;

/// A mapping from codec name to a single-step pipeline for that codec.
#[derive(Debug)]
pub struct MultiPipeline {
    pipes: IndexMap<String, Pipeline>,
}

impl MultiPipeline {
    /// Build a single-step pipeline for each named codec. Construction fails
    /// fast on the first name that does not resolve.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pipes = IndexMap::new();
        for name in names {
            let name = name.as_ref();
            pipes.insert(name.to_string(), Pipeline::new([name])?);
        }
        Ok(Self { pipes })
    }

    fn pipeline(&self, name: &str) -> Result<&Pipeline> {
        self.pipes
            .get(name)
            .ok_or_else(|| BinpipeError::UnknownPipeline(name.to_string()))
    }

    /// Transform binary input into binary output for the named pipeline.
    pub fn bin_to_bin(&self, name: &str, input: &[u8]) -> Result<Vec<u8>> {
        self.pipeline(name)?.bin_to_bin(input)
    }

    /// Transform binary input into a string representation for the named
    /// pipeline.
    pub fn bin_to_str(&self, name: &str, input: &[u8]) -> Result<String> {
        self.pipeline(name)?.bin_to_str(input)
    }

    /// Transform a string representation into binary output for the named
    /// pipeline.
    pub fn str_to_bin(&self, name: &str, input: &str) -> Result<Vec<u8>> {
        self.pipeline(name)?.str_to_bin(input)
    }

    /// Transform a string representation into a different string
    /// representation for the named pipeline.
    pub fn str_to_str(&self, name: &str, input: &str) -> Result<String> {
        self.pipeline(name)?.str_to_str(input)
    }

    /// Like [`MultiPipeline::bin_to_str`] but aborts on failure. Only for
    /// call sites that have already guaranteed success, such as printing a
    /// freshly generated identifier.
    ///
    /// # Panics
    ///
    /// Panics if the pipeline name is unknown or the conversion fails.
    pub fn must_bin_to_str(&self, name: &str, input: &[u8]) -> String {
        match self.bin_to_str(name, input) {
            Ok(out) => out,
            Err(err) => panic!("conversion to {name} failed: {err}"),
        }
    }
}
