//! Helpers for converting between binary and string representations.
//!
//! Values move through a [`Pipeline`]: an ordered chain of codecs, each of
//! which decodes the data produced by the previous step and re-encodes it
//! for the next. Codecs are looked up by name in a process-wide registry, so
//! a pipeline can be assembled directly from user input:
//!
//! ```
//! use binpipe::Pipeline;
//!
//! let pipe = Pipeline::new(["ulid", "b64"])?;
//! let b64 = pipe.str_to_str("01H3W1T4BNATG1KGP7S817K4BF")?;
//! assert_eq!(b64, "AYj4HRF1VqAZwsfKAnmRbw==");
//! # Ok::<(), binpipe::BinpipeError>(())
//! ```

pub mod cli;
pub mod codec;
pub mod error;
pub mod multi;
pub mod pipeline;
pub mod registry;
pub mod version;

pub use codec::{Base64, Base64Scheme, Codec, Hex, Text, TextEncoding, Ulid, Uuid};
pub use error::{BinpipeError, Result};
pub use multi::MultiPipeline;
pub use pipeline::{Pipeline, Step};
pub use registry::{CodecRegistry, codec_names, new_codec, register_codec};
pub use version::version;
