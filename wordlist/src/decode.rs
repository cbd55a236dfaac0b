use std::path::Path;

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};

use crate::Error;

/// BOM (Byte Order Mark) patterns for encoding detection
const BOM_PATTERNS: &[(&[u8], &Encoding, usize, &str)] = &[
    (&[0xEF, 0xBB, 0xBF], UTF_8, 3, "UTF-8"),
    (&[0xFF, 0xFE], UTF_16LE, 2, "UTF-16 LE"),
    (&[0xFE, 0xFF], UTF_16BE, 2, "UTF-16 BE"),
];

/// Reads a wordlist file and decodes it based on its BOM (Byte Order Mark).
///
/// Supports:
/// - UTF-8 with BOM (EF BB BF)
/// - UTF-16 LE with BOM (FF FE)
/// - UTF-16 BE with BOM (FE FF)
/// - UTF-8 without BOM (fallback)
///
/// The file handle is released before this function returns.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The file is not valid UTF-8 and has no BOM
/// - The bytes after a BOM are not valid in the encoding it announces
#[tracing::instrument(skip(file_path), fields(path = %file_path.display()))]
pub(crate) fn read_and_decode_file(file_path: &Path) -> Result<String, Error> {
    let bytes = std::fs::read(file_path).map_err(|source| {
        tracing::error!(path = ?file_path.display(), error = ?source, "failed to read file");
        Error::Read {
            path: file_path.to_path_buf(),
            source,
        }
    })?;
    decode_bytes(&bytes).ok_or_else(|| Error::UnrecognizedEncoding(file_path.to_path_buf()))
}

/// Decode raw bytes, honouring a leading BOM. Returns `None` when the bytes are
/// not valid in the detected encoding (UTF-8 when there is no BOM).
pub(crate) fn decode_bytes(bytes: &[u8]) -> Option<String> {
    for (bom, encoding, skip, name) in BOM_PATTERNS {
        if bytes.starts_with(bom)
            && let Some(content) = bytes.get(*skip..)
        {
            let (cow, had_errors) = encoding.decode_without_bom_handling(content);
            if had_errors {
                tracing::error!(encoding = name, "decoding encountered errors");
                return None;
            }
            return Some(cow.into_owned());
        }
    }

    let (cow, had_errors) = UTF_8.decode_without_bom_handling(bytes);
    if had_errors {
        return None;
    }
    Some(cow.into_owned())
}
