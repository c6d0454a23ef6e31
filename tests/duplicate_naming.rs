use std::ffi::OsStr;
use std::fs;
use tempfile::tempdir;

use flatcopy::resolve_destination;

#[test]
fn no_collision_returns_requested_name() {
    let td = tempdir().unwrap();
    let dst_dir = td.path();
    let dst = resolve_destination(dst_dir, OsStr::new("app.ts"), true).unwrap();
    assert_eq!(dst, dst_dir.join("app.ts"));
}

#[test]
fn single_collision_gets_suffix_one() {
    let td = tempdir().unwrap();
    let dst_dir = td.path();
    fs::write(dst_dir.join("util.ts"), b"x").unwrap();
    let dst = resolve_destination(dst_dir, OsStr::new("util.ts"), true).unwrap();
    assert_eq!(dst, dst_dir.join("util_1.ts"));
}

#[test]
fn multiple_collisions_increment_suffix() {
    let td = tempdir().unwrap();
    let dst_dir = td.path();
    fs::write(dst_dir.join("util.ts"), b"0").unwrap();
    fs::write(dst_dir.join("util_1.ts"), b"1").unwrap();
    fs::write(dst_dir.join("util_2.ts"), b"2").unwrap();
    let dst = resolve_destination(dst_dir, OsStr::new("util.ts"), true).unwrap();
    assert_eq!(dst, dst_dir.join("util_3.ts"));
}

#[test]
fn gap_in_numbering_is_reused() {
    let td = tempdir().unwrap();
    let dst_dir = td.path();
    fs::write(dst_dir.join("util.ts"), b"0").unwrap();
    fs::write(dst_dir.join("util_2.ts"), b"2").unwrap();
    let dst = resolve_destination(dst_dir, OsStr::new("util.ts"), true).unwrap();
    assert_eq!(dst, dst_dir.join("util_1.ts"));
}

#[test]
fn extensionless_and_dotfile_suffixing() {
    let td = tempdir().unwrap();
    let dst_dir = td.path();
    fs::write(dst_dir.join("Makefile"), b"a").unwrap();
    fs::write(dst_dir.join(".env"), b"a").unwrap();
    assert_eq!(
        resolve_destination(dst_dir, OsStr::new("Makefile"), true).unwrap(),
        dst_dir.join("Makefile_1")
    );
    assert_eq!(
        resolve_destination(dst_dir, OsStr::new(".env"), true).unwrap(),
        dst_dir.join(".env_1")
    );
}

#[test]
fn trailing_dot_suffixes_after_whole_name() {
    let td = tempdir().unwrap();
    let dst_dir = td.path();
    fs::write(dst_dir.join("notes."), b"a").unwrap();
    let dst = resolve_destination(dst_dir, OsStr::new("notes."), true).unwrap();
    assert_eq!(dst, dst_dir.join("notes._1"));
}

#[test]
fn multi_extension_position() {
    let td = tempdir().unwrap();
    let dst_dir = td.path();
    fs::write(dst_dir.join("archive.tar.gz"), b"a").unwrap();
    let dst = resolve_destination(dst_dir, OsStr::new("archive.tar.gz"), true).unwrap();
    assert_eq!(dst, dst_dir.join("archive.tar_1.gz"));
}

#[test]
fn dockerfile_gets_text_suffix_then_numbers() {
    let td = tempdir().unwrap();
    let dst_dir = td.path();
    let first = resolve_destination(dst_dir, OsStr::new("Dockerfile"), true).unwrap();
    assert_eq!(first, dst_dir.join("Dockerfile.txt"));

    fs::write(&first, b"FROM scratch").unwrap();
    let second = resolve_destination(dst_dir, OsStr::new("Dockerfile"), true).unwrap();
    assert_eq!(second, dst_dir.join("Dockerfile_1.txt"));
}

#[test]
fn any_dockerfile_case_uses_canonical_text_name() {
    let td = tempdir().unwrap();
    let dst_dir = td.path();
    let dst = resolve_destination(dst_dir, OsStr::new("dockerfile"), true).unwrap();
    assert_eq!(dst.file_name(), Some(OsStr::new("Dockerfile.txt")));

    fs::write(&dst, b"FROM alpine").unwrap();
    let next = resolve_destination(dst_dir, OsStr::new("DOCKERFILE"), true).unwrap();
    assert_eq!(next.file_name(), Some(OsStr::new("Dockerfile_1.txt")));
}

#[test]
fn dockerfile_variant_disabled_keeps_name() {
    let td = tempdir().unwrap();
    let dst_dir = td.path();
    assert_eq!(
        resolve_destination(dst_dir, OsStr::new("Dockerfile"), false).unwrap(),
        dst_dir.join("Dockerfile")
    );
    // only an extensionless Dockerfile is affected
    assert_eq!(
        resolve_destination(dst_dir, OsStr::new("Dockerfile.dev"), true).unwrap(),
        dst_dir.join("Dockerfile.dev")
    );
}

#[cfg(unix)]
#[test]
fn non_utf8_name_suffixing() {
    use std::os::unix::ffi::OsStrExt;
    let td = tempdir().unwrap();
    let dst_dir = td.path();
    // Name with invalid UTF-8 sequence
    let raw = [0xff, 0xfe, b'.', b't', b's'];
    let name = OsStr::from_bytes(&raw);
    fs::write(dst_dir.join(name), b"x").unwrap();

    let dst = resolve_destination(dst_dir, name, true).unwrap();
    assert_eq!(dst.file_name().unwrap().as_bytes(), b"\xff\xfe_1.ts");
}
