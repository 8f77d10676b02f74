use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn probekit_cmd() -> Command {
    let mut cmd = Command::cargo_bin("probekit").expect("Failed to find probekit binary");
    cmd.env_remove("PROBEKIT_FFPROBE");
    cmd
}

#[test]
fn test_help_lists_commands() {
    probekit_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("info"))
        .stdout(contains("check"));
}

#[test]
fn test_info_requires_input() {
    probekit_cmd().arg("info").assert().failure();
}

#[test]
fn test_info_with_missing_ffprobe_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let missing_tool = dir.path().join("no-such-ffprobe");

    probekit_cmd()
        .arg("--ffprobe")
        .arg(&missing_tool)
        .arg("info")
        .arg("movie.mkv")
        .assert()
        .failure()
        .stderr(contains("Failed to probe movie.mkv"))
        .stderr(contains("Failed to start"));

    Ok(())
}

#[test]
fn test_check_with_missing_ffprobe_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    probekit_cmd()
        .arg("check")
        .env("PROBEKIT_FFPROBE", dir.path().join("no-such-ffprobe"))
        .assert()
        .failure()
        .stderr(contains("Required dependency not found"));

    Ok(())
}

#[cfg(unix)]
mod with_fake_ffprobe {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use std::sync::OnceLock;
    use tempfile::TempDir;

    const FAKE_FFPROBE: &str = r#"#!/bin/sh
[ "$1" = "-show_format" ] && [ "$2" = "-show_streams" ] || exit 0
cat <<'EOF'
[FORMAT]
filename=a.mp4
duration=10.5
[/FORMAT]
[STREAM]
index=0
codec_type=video
[/STREAM]
EOF
[ "$3" = "broken.mkv" ] && exit 1
exit 0
"#;

    /// Writes the stand-in script once per test binary.
    fn fake_ffprobe() -> &'static Path {
        static SCRIPT: OnceLock<(TempDir, PathBuf)> = OnceLock::new();
        let (_dir, path) = SCRIPT.get_or_init(|| {
            let dir = tempdir().expect("create script dir");
            let path = dir.path().join("fake-ffprobe");
            fs::write(&path, FAKE_FFPROBE).expect("write script");
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod script");
            (dir, path)
        });
        path
    }

    #[test]
    fn test_info_json() {
        probekit_cmd()
            .args(["info", "a.mp4", "--json"])
            .env("PROBEKIT_FFPROBE", fake_ffprobe())
            .assert()
            .success()
            .stdout(contains("\"filename\": \"a.mp4\""))
            .stdout(contains("\"codec_type\": \"video\""));
    }

    #[test]
    fn test_info_listing() {
        probekit_cmd()
            .arg("--ffprobe")
            .arg(fake_ffprobe())
            .args(["info", "a.mp4"])
            .assert()
            .success()
            .stdout(contains("FORMAT"))
            .stdout(contains("STREAM 0"))
            .stdout(contains("1 stream(s)"));
    }

    #[test]
    fn test_info_fails_when_ffprobe_exits_unsuccessfully() {
        probekit_cmd()
            .arg("--ffprobe")
            .arg(fake_ffprobe())
            .args(["info", "broken.mkv"])
            .assert()
            .failure()
            .stderr(contains("exited unsuccessfully"));
    }

    #[test]
    fn test_check_succeeds() {
        probekit_cmd()
            .arg("--ffprobe")
            .arg(fake_ffprobe())
            .arg("check")
            .assert()
            .success()
            .stdout(contains("is available"));
    }

    #[test]
    fn test_log_dir_receives_log_file() -> Result<(), Box<dyn Error>> {
        let logs = tempdir()?;

        probekit_cmd()
            .arg("--ffprobe")
            .arg(fake_ffprobe())
            .arg("--log-dir")
            .arg(logs.path())
            .args(["-v", "info", "a.mp4"])
            .assert()
            .success();

        let entries: Vec<_> = fs::read_dir(logs.path())?.collect::<Result<_, _>>()?;
        assert_eq!(entries.len(), 1);
        let contents = fs::read_to_string(entries[0].path())?;
        assert!(contents.contains("Probing a.mp4"), "{contents}");

        Ok(())
    }
}
