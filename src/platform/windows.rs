//! Files inherit the ACL of their directory; there are no mode bits to set
//! and directory handles cannot be fsynced through std.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

pub(super) fn owner_only(_opts: &mut OpenOptions) {}

pub fn restrict_dir_to_owner(_path: &Path) -> io::Result<()> {
    Ok(())
}

pub(super) fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
