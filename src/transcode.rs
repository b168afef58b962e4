use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

const CR: u8 = b'\r';
const LF: u8 = b'\n';
const TAB: u8 = b'\t';

#[derive(Error, Debug)]
pub enum TranscodeError {
    #[error("Cannot open file {0}: {1}")]
    Open(PathBuf, #[source] io::Error),

    #[error("Cannot read file {0}: {1}")]
    Read(PathBuf, #[source] io::Error),
}

/// Markup gets its CR/LF/TABs stripped to save flash, everything else is
/// copied verbatim.
pub fn should_strip(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => ext.eq_ignore_ascii_case("htm") || ext.eq_ignore_ascii_case("html"),
        None => false,
    }
}

/// Copy bytes from `reader` in order, dropping CR, LF and TAB when `strip`
/// is set. The length of the result is what ends up in the `_len` constant.
pub fn transcode<R: Read>(reader: R, strip: bool) -> io::Result<Vec<u8>> {
    let mut kept = Vec::new();
    for byte in BufReader::new(reader).bytes() {
        let byte = byte?;
        if strip && (byte == CR || byte == LF || byte == TAB) {
            continue;
        }
        kept.push(byte);
    }
    Ok(kept)
}

/// Read and transcode a whole file. The handle is closed before returning.
pub fn transcode_file(path: &Path, strip: bool) -> Result<Vec<u8>, TranscodeError> {
    let fp = File::open(path).map_err(|err| TranscodeError::Open(path.to_path_buf(), err))?;
    transcode(fp, strip).map_err(|err| TranscodeError::Read(path.to_path_buf(), err))
}

/// Render one byte the way it appears in the generated array.
pub fn hex_literal(byte: u8) -> String {
    format!("0x{:02x}", byte)
}
