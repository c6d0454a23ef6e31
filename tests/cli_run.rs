use assert_fs::prelude::*;
use assert_fs::TempDir;
use std::process::Command;

fn flatcopy(cfg_dir: &TempDir) -> Command {
    let me = assert_cmd::cargo::cargo_bin!("flatcopy");
    let mut cmd = Command::new(me);
    // Keep the user's real config out of the run.
    cmd.env("FLATCOPY_CONFIG", cfg_dir.path().join("absent.xml"));
    cmd
}

#[test]
fn binary_print_config_succeeds() {
    let td = TempDir::new().unwrap();
    let out = flatcopy(&td).arg("--print-config").output().expect("spawn binary");
    assert!(out.status.success(), "binary should succeed with --print-config");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("absent.xml"), "stdout: {stdout}");
}

#[test]
fn binary_copies_and_reports() {
    let td = TempDir::new().unwrap();
    let src = td.child("project");
    src.child("api/server.ts").write_str("server").unwrap();
    src.child("web/server.ts").write_str("web").unwrap();
    src.child("Dockerfile").write_str("FROM node").unwrap();
    src.child("node_modules/x/index.js").write_str("dep").unwrap();
    let dest = td.child("flat");

    let out = flatcopy(&td)
        .arg("--source")
        .arg(src.path())
        .arg("--dest")
        .arg(dest.path())
        .args(["--log-level", "quiet"])
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    dest.child("server.ts").assert("server");
    dest.child("server_1.ts").assert("web");
    dest.child("Dockerfile.txt").assert("FROM node");
    assert!(!dest.child("index.js").path().exists());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Copied (renamed):"), "stdout: {stdout}");
    assert!(stdout.contains("Files copied: 3"), "stdout: {stdout}");
}

#[test]
fn binary_fails_on_missing_source() {
    let td = TempDir::new().unwrap();
    let dest = td.child("flat");
    dest.child("keep.ts").write_str("keep").unwrap();

    let out = flatcopy(&td)
        .arg("--source")
        .arg(td.path().join("missing"))
        .arg("--dest")
        .arg(dest.path())
        .args(["--log-level", "quiet"])
        .output()
        .expect("spawn binary");

    assert!(!out.status.success());
    dest.child("keep.ts").assert("keep");
}

#[test]
fn init_config_writes_template_once() {
    let td = TempDir::new().unwrap();
    let cfg = td.child("conf/config.xml");

    let first = flatcopy(&td)
        .arg("--init-config")
        .arg("--config")
        .arg(cfg.path())
        .output()
        .expect("spawn binary");
    assert!(first.status.success());
    assert!(std::fs::read_to_string(cfg.path()).unwrap().contains("<config>"));

    let second = flatcopy(&td)
        .arg("--init-config")
        .arg("--config")
        .arg(cfg.path())
        .output()
        .expect("spawn binary");
    assert!(!second.status.success(), "existing config must not be overwritten");
}

