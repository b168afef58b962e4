use crate::emit::emit_file;
use crate::ident::synthesize;
use crate::transcode::{should_strip, transcode_file};
use crate::types::Descriptor;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Path segments of `path` below `root`, lossily converted to text.
fn relative_segments(root: &Path, path: &Path) -> Vec<String> {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect()
}

/// Display path with its original bytes, '/'-separated, leading '/'.
#[cfg(unix)]
fn page_name_bytes(root: &Path, path: &Path) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;

    let rel = path.strip_prefix(root).unwrap_or(path);
    let mut name = Vec::new();
    for c in rel.components() {
        name.push(b'/');
        name.extend_from_slice(c.as_os_str().as_bytes());
    }
    name
}

#[cfg(not(unix))]
fn page_name_bytes(root: &Path, path: &Path) -> Vec<u8> {
    format!("/{}", relative_segments(root, path).join("/")).into_bytes()
}

/// Process a single regular file. Returns None if it could not be read, in
/// which case nothing was written to `out`.
pub fn process_file<W: Write>(
    out: &mut W,
    root: &Path,
    path: &Path,
    nostrip: bool,
) -> Result<Option<Descriptor>> {
    info!("Processing file: {}", path.display());

    let strip = !nostrip && should_strip(path);
    if !nostrip && !strip {
        info!("- File will not be stripped");
    }

    let bytes = match transcode_file(path, strip) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("{}", err);
            return Ok(None);
        }
    };

    let segments = relative_segments(root, path);
    let ident = synthesize(&segments);
    let page_name = format!("/{}", segments.join("/"));
    if path.strip_prefix(root).unwrap_or(path).to_str().is_none() {
        warn!(
            "- Name of {} is not UTF-8; identifier is {}, the embedded name keeps the raw bytes",
            path.display(),
            ident
        );
    }
    debug!(" - {} -> {} ({} bytes)", page_name, ident, bytes.len());

    emit_file(out, &ident, &page_name_bytes(root, path), &bytes)
        .with_context(|| format!("Failed to write declarations for {}", path.display()))?;

    Ok(Some(Descriptor {
        ident,
        page_name,
        length: bytes.len(),
    }))
}

/// Walk `dir` (somewhere below `root`) in sorted order, emitting every
/// regular file and recursing into subdirectories. Descriptors come back in
/// traversal order.
///
/// Only a failure to list `root` itself, or to write to `out`, is an error;
/// anything else is logged and skipped.
pub fn process_dir<W: Write>(
    out: &mut W,
    root: &Path,
    dir: &Path,
    nostrip: bool,
) -> Result<Vec<Descriptor>> {
    info!("Processing directory: {}", dir.display());

    let listing = match fs::read_dir(dir) {
        Ok(listing) => listing,
        Err(err) if dir != root => {
            warn!("Cannot list directory {}: {}", dir.display(), err);
            return Ok(Vec::new());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Cannot list web root {}", dir.display()));
        }
    };

    let mut entries = Vec::new();
    for entry in listing {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(err) => warn!("Bad entry in {}: {}", dir.display(), err),
        }
    }
    entries.sort_by_key(|e| e.file_name());

    let mut found: Vec<Descriptor> = Vec::new();
    for entry in entries {
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(err) => {
                warn!("Skipping {}: {}", path.display(), err);
                continue;
            }
        };

        if file_type.is_file() {
            if let Some(descriptor) = process_file(out, root, &path, nostrip)? {
                found.push(descriptor);
            }
        } else if file_type.is_dir() {
            found.extend(process_dir(out, root, &path, nostrip)?);
        } else {
            warn!("Skipping {}", path.display());
        }
    }

    Ok(found)
}
