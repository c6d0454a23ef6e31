//! Copy executor.
//! - Streams src into a newly created dest (create_new; never clobbers).
//! - Removes a partially written dest on failure.
//! - Preserves timestamps and permissions afterwards.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

use super::metadata;
use crate::errors::FlatCopyError;

const BUF_SIZE: usize = 256 * 1024;

/// Copy `src` to `dest` and carry over mtime/atime and permission bits.
/// Returns the number of bytes copied.
pub fn copy_with_metadata(src: &Path, dest: &Path) -> Result<u64, FlatCopyError> {
    let src_meta = fs::metadata(src).map_err(|e| FlatCopyError::from_io("stat source", src, e))?;

    let bytes = copy_streaming(src, dest)?;
    metadata::preserve_metadata(dest, &src_meta);

    debug!(src = %src.display(), dest = %dest.display(), bytes, "copied file");
    Ok(bytes)
}

fn copy_streaming(src: &Path, dest: &Path) -> Result<u64, FlatCopyError> {
    let src_f = File::open(src).map_err(|e| FlatCopyError::from_io("open source", src, e))?;
    let dst_f = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .map_err(|e| FlatCopyError::from_io("create destination file", dest, e))?;

    let result = (|| -> io::Result<u64> {
        let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
        let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
        let n = io::copy(&mut reader, &mut writer)?;
        writer.flush()?;
        Ok(n)
    })();

    result.map_err(|e| {
        // Best-effort cleanup so a failed copy leaves no truncated file behind.
        let _ = fs::remove_file(dest);
        FlatCopyError::from_io("copy file", src, e)
    })
}
