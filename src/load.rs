//! Purpose: Load a JSON document from a file, blocking or on the tokio runtime.
//! Exports: `Encoding`, `LoadOptions`, `load_sync`, `load_sync_with`, `load`, `load_with`.
//! Role: File-system layer over the codec; reads the whole file, decodes text, then parses.
//! Invariants: Parsing starts only after the full read completes; no partial parses.
//! Invariants: Read and text-decoding failures are `FileSystem` errors carrying the io::Error.
//! Invariants: No retries and no timeouts; dropping the async future does not cancel the read.

use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;

use crate::core::error::{Error, ErrorKind};
use crate::core::value::JsonValue;
use crate::json::parse;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_BOM: u16 = 0xFEFF;

/// Text encoding used to turn file bytes into JSON text.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16Le,
    Latin1,
    Ascii,
}

impl Encoding {
    pub fn label(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf8",
            Encoding::Utf16Le => "utf16le",
            Encoding::Latin1 => "latin1",
            Encoding::Ascii => "ascii",
        }
    }

    fn decode(self, bytes: Vec<u8>) -> Result<String, io::Error> {
        match self {
            Encoding::Utf8 => {
                let bytes = if bytes.starts_with(UTF8_BOM) {
                    bytes[UTF8_BOM.len()..].to_vec()
                } else {
                    bytes
                };
                String::from_utf8(bytes).map_err(invalid_data)
            }
            Encoding::Utf16Le => {
                if bytes.len() % 2 != 0 {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        "utf16le input has an odd number of bytes",
                    ));
                }
                let mut units = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .peekable();
                if units.peek() == Some(&UTF16_BOM) {
                    units.next();
                }
                char::decode_utf16(units)
                    .collect::<Result<String, _>>()
                    .map_err(invalid_data)
            }
            Encoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
            Encoding::Ascii => {
                if let Some(pos) = bytes.iter().position(|byte| !byte.is_ascii()) {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("non-ascii byte at offset {pos}"),
                    ));
                }
                String::from_utf8(bytes).map_err(invalid_data)
            }
        }
    }
}

fn invalid_data(err: impl std::error::Error + Send + Sync + 'static) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err)
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self, Error> {
        match label.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Ok(Encoding::Utf16Le),
            "latin1" | "binary" => Ok(Encoding::Latin1),
            "ascii" => Ok(Encoding::Ascii),
            _ => Err(Error::new(ErrorKind::Usage)
                .with_message(format!("unknown encoding label `{label}`"))),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LoadOptions {
    pub encoding: Encoding,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Reads `path` as UTF-8 and parses it, blocking the current thread.
pub fn load_sync(path: impl AsRef<Path>) -> Result<JsonValue, Error> {
    load_sync_with(path, &LoadOptions::default())
}

pub fn load_sync_with(path: impl AsRef<Path>, options: &LoadOptions) -> Result<JsonValue, Error> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|err| read_error(path, err))?;
    decode_and_parse(path, bytes, options)
}

/// Reads `path` as UTF-8 on the tokio runtime and parses it once the read completes.
pub async fn load(path: impl AsRef<Path>) -> Result<JsonValue, Error> {
    load_with(path, &LoadOptions::default()).await
}

pub async fn load_with(path: impl AsRef<Path>, options: &LoadOptions) -> Result<JsonValue, Error> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| read_error(path, err))?;
    decode_and_parse(path, bytes, options)
}

fn decode_and_parse(
    path: &Path,
    bytes: Vec<u8>,
    options: &LoadOptions,
) -> Result<JsonValue, Error> {
    tracing::debug!(
        path = %path.display(),
        encoding = %options.encoding,
        bytes = bytes.len(),
        "read json file"
    );
    let text = options.encoding.decode(bytes).map_err(|err| {
        Error::new(ErrorKind::FileSystem)
            .with_message(format!("file is not valid {}", options.encoding))
            .with_path(path)
            .with_source(err)
    })?;
    parse::parse(&text).map_err(|err| err.with_path(path))
}

fn read_error(path: &Path, err: io::Error) -> Error {
    let message = match err.kind() {
        io::ErrorKind::NotFound => "file not found",
        io::ErrorKind::PermissionDenied => "permission denied",
        _ => "failed to read file",
    };
    Error::new(ErrorKind::FileSystem)
        .with_message(message)
        .with_path(path)
        .with_source(err)
}
