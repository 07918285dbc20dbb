use std::path::Path;
use std::process::Command;

/// Run `gofmt -w` on a generated file.
pub fn format_go_file(path: &Path) -> anyhow::Result<()> {
    // Allow tests to override the gofmt binary path without mutating PATH
    let gofmt_bin = std::env::var("IOTAGEN_GOFMT_BIN").unwrap_or_else(|_| "gofmt".to_string());

    let status = Command::new(gofmt_bin).arg("-w").arg(path).status()?;
    if !status.success() {
        anyhow::bail!("gofmt failed on {}", path.display());
    }
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::env;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::sync::{Mutex, OnceLock};

    // Serialize environment mutations to avoid test races
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn run_with_stub(script: &str) -> anyhow::Result<()> {
        let _guard = ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let stub = dir.path().join("gofmt");
        fs::write(&stub, script).unwrap();
        let mut perms = fs::metadata(&stub).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&stub, perms).unwrap();
        let target = dir.path().join("service.go");
        fs::write(&target, "package a\n").unwrap();

        let old_bin = env::var("IOTAGEN_GOFMT_BIN").ok();
        env::set_var("IOTAGEN_GOFMT_BIN", &stub);
        let res = format_go_file(&target);
        match old_bin {
            Some(v) => env::set_var("IOTAGEN_GOFMT_BIN", v),
            None => env::remove_var("IOTAGEN_GOFMT_BIN"),
        }
        res
    }

    #[test]
    fn test_format_go_file_ok() {
        assert!(run_with_stub("#!/bin/sh\nexit 0\n").is_ok());
    }

    #[test]
    fn test_format_go_file_error() {
        let err = run_with_stub("#!/bin/sh\nexit 1\n").unwrap_err();
        assert!(err.to_string().contains("gofmt failed"));
    }
}
