use std::fs::{self, File, OpenOptions};
use std::io;
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::Path;

/// 0600 on create; umask can only narrow it further.
pub(super) fn owner_only(opts: &mut OpenOptions) {
    opts.mode(0o600);
}

/// chmod 0700, used on the config directory flatcopy creates.
pub fn restrict_dir_to_owner(path: &Path) -> io::Result<()> {
    fs::set_permissions(path, fs::Permissions::from_mode(0o700))
}

/// Persist a rename by syncing the containing directory.
pub(super) fn sync_dir(dir: &Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}
