//! Command line interface for binpipe
//!
//! The CLI is glue around the library core: it resolves user-supplied codec
//! names, reads input from arguments, a file, or stdin, and invokes the
//! pipeline conversions. Identifier generation for the `ulid` and `uuid`
//! subcommands also lives here; the core only decodes and encodes values
//! that already exist.

use std::fs;
use std::io::Read as _;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use rand::RngCore as _;
use tracing::debug;

use crate::error::{BinpipeError, Result};
use crate::multi::MultiPipeline;
use crate::pipeline::Pipeline;
use crate::registry::codec_names;
use crate::version::version;

/// Encoder name that triggers table output instead of a single encoding.
const PRETTY: &str = "pretty";

/// binpipe command
#[derive(Parser)]
#[command(
    name = "binpipe",
    version = version(),
    about = "Helpers for converting to and from binary and string representations",
    long_about = "Convert input between registered representations, for example a ulid to base64:\n\n  binpipe -d ulid -e b64 01H3W3MX9A4AFNW55R0MNMQR6Y\n\nTo list the registered codecs:\n\n  binpipe decoders",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Read data from the specified path on disk
    #[clap(short = 'r', long)]
    pub read: Option<PathBuf>,

    /// The format to decode the input from
    #[clap(short = 'd', long)]
    pub decode: Option<String>,

    /// The format to encode the input to
    #[clap(short = 'e', long)]
    pub encode: Option<String>,

    /// The input is binary data, not a UTF-8 string
    #[clap(short = 'b', long)]
    pub binary: bool,

    /// Values to convert (stdin is read when absent)
    pub input: Vec<String>,

    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the list of registered codecs
    Decoders,

    /// Generate a new ulid
    Ulid {
        /// The encoder to display the ulid in, or "pretty" for a table
        #[clap(short = 'e', long, default_value = PRETTY)]
        encoder: String,
        /// Omit the trailing newline, useful with pbcopy
        #[clap(short = 'n', long)]
        no_newline: bool,
    },

    /// Generate a new uuid
    Uuid {
        /// The encoder to display the uuid in, or "pretty" for a table
        #[clap(short = 'e', long, default_value = PRETTY)]
        encoder: String,
        /// Omit the trailing newline, useful with pbcopy
        #[clap(short = 'n', long)]
        no_newline: bool,
    },

    /// Generate a new random byte array
    Rand {
        /// The number of bytes to generate
        #[clap(short = 's', long, default_value_t = 16)]
        size: usize,
        /// The encoder to display the bytes in
        #[clap(short = 'e', long, default_value = "base64")]
        encoder: String,
        /// Omit the trailing newline, useful with pbcopy
        #[clap(short = 'n', long)]
        no_newline: bool,
    },
}

/// Default action: decode the input with one codec and encode it with
/// another, printing one output line per input value.
pub fn convert_command(cli: &Cli) -> Result<()> {
    if !cli.input.is_empty() && cli.read.is_some() {
        return Err(BinpipeError::usage(
            "cannot specify input arguments and a path to read from",
        ));
    }

    let (Some(decode), Some(encode)) = (&cli.decode, &cli.encode) else {
        return Err(BinpipeError::usage(
            "both a decoder (-d) and an encoder (-e) must be specified",
        ));
    };

    let pipe = Pipeline::new([decode.as_str(), encode.as_str()])?;

    if cli.binary {
        if !cli.input.is_empty() {
            return Err(BinpipeError::usage(
                "binary input must be read from a file or stdin",
            ));
        }
        let data = read_binary(cli.read.as_deref())?;
        debug!("converting {} bytes of binary input", data.len());
        println!("{}", pipe.bin_to_str(&data)?);
        return Ok(());
    }

    let inputs = if cli.input.is_empty() {
        vec![read_text(cli.read.as_deref())?]
    } else {
        cli.input.clone()
    };

    for input in &inputs {
        println!("{}", pipe.str_to_str(input)?);
    }
    Ok(())
}

/// Print the registered canonical codec names.
pub fn decoders_command() -> Result<()> {
    println!("Registered Codecs:\n==================");
    for name in codec_names() {
        println!("- {name}");
    }
    Ok(())
}

/// Generate a new ulid and display it with the requested encoder, or as a
/// table of its common representations.
pub fn ulid_command(encoder: &str, no_newline: bool) -> Result<()> {
    let id = ulid::Ulid::new();
    let bytes = id.0.to_be_bytes();

    if encoder != PRETTY {
        return print_encoded(encoder, &bytes, no_newline);
    }

    let multi = MultiPipeline::new(["hex", "b64"])?;
    let timestamp: DateTime<Utc> = id.datetime().into();
    println!("{:<12}{}", "ULID", id);
    println!("{:<12}{}", "Time", timestamp.to_rfc3339());
    println!("{:<12}{}", "Hex Bytes", multi.must_bin_to_str("hex", &bytes));
    println!("{:<12}{}", "b64 Bytes", multi.must_bin_to_str("b64", &bytes));
    Ok(())
}

/// Generate a new random uuid and display it with the requested encoder, or
/// as a table of its common representations.
pub fn uuid_command(encoder: &str, no_newline: bool) -> Result<()> {
    let id = uuid::Uuid::new_v4();
    let bytes = *id.as_bytes();

    if encoder != PRETTY {
        return print_encoded(encoder, &bytes, no_newline);
    }

    let multi = MultiPipeline::new(["hex", "b64"])?;
    println!("{:<12}{}", "UUID", id);
    println!("{:<12}{}", "Hex Bytes", multi.must_bin_to_str("hex", &bytes));
    println!("{:<12}{}", "b64 Bytes", multi.must_bin_to_str("b64", &bytes));
    Ok(())
}

/// Generate random bytes and display them with the requested encoder.
pub fn rand_command(size: usize, encoder: &str, no_newline: bool) -> Result<()> {
    let mut data = vec![0u8; size];
    rand::rng().fill_bytes(&mut data);
    print_encoded(encoder, &data, no_newline)
}

fn print_encoded(encoder: &str, data: &[u8], no_newline: bool) -> Result<()> {
    let pipe = Pipeline::new([encoder])?;
    let out = pipe.bin_to_str(data)?;
    if no_newline {
        print!("{out}");
    } else {
        println!("{out}");
    }
    Ok(())
}

fn read_binary(path: Option<&std::path::Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut data = Vec::new();
            std::io::stdin().read_to_end(&mut data)?;
            Ok(data)
        }
    }
}

fn read_text(path: Option<&std::path::Path>) -> Result<String> {
    let text = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    Ok(text.trim_end_matches(['\r', '\n']).to_string())
}
