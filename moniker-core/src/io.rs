use std::path::Path;
use std::{fs, io};

use encoding_rs::Encoding;

use crate::error::{Error, Result};

/// Byte order mark, dropped when it starts a decoded source.
const BOM: char = '\u{feff}';

/// Reads a whole word source into memory.
///
/// - `encoding` is a WHATWG label (`"utf-8"`, `"latin1"`, `"shift_jis"`, ...)
/// - A leading byte order mark is removed
/// - An unknown label, an I/O failure or a malformed byte sequence is
///   reported as `Error::SourceRead`
pub(crate) fn read_source<P: AsRef<Path>>(filename: P, encoding: &str) -> Result<String> {
	let path = filename.as_ref();
	let source_error = |source: io::Error| Error::SourceRead { path: path.to_path_buf(), source };

	let encoding = Encoding::for_label(encoding.trim().as_bytes()).ok_or_else(|| {
		source_error(io::Error::new(
			io::ErrorKind::InvalidInput,
			format!("unknown encoding '{encoding}'"),
		))
	})?;
	let bytes = fs::read(path).map_err(source_error)?;

	let text = encoding
		.decode_without_bom_handling_and_without_replacement(&bytes)
		.ok_or_else(|| {
			source_error(io::Error::new(
				io::ErrorKind::InvalidData,
				format!("malformed {} data", encoding.name()),
			))
		})?;

	Ok(strip_bom(&text).to_owned())
}

/// Removes a leading byte order mark, if any.
pub(crate) fn strip_bom(text: &str) -> &str {
	text.strip_prefix(BOM).unwrap_or(text)
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./dict/nouns.txt"` → `"nouns"`
/// - `"nouns"` → `"nouns"`
/// - `"/"` → `""`
pub(crate) fn get_filename<P: AsRef<Path>>(input_path: P) -> String {
	input_path
		.as_ref()
		.file_stem()
		.map(|stem| stem.to_string_lossy().to_string())
		.unwrap_or_default()
}
