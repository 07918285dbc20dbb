use anyhow::Context;
use std::fs;
use std::path::Path;

/// What happened to an output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The file existed and `force` was not set
    Skipped,
    /// Dry run: nothing was written
    DryRun,
}

/// Write generated source to `path`.
///
/// An existing file is user-owned and is only replaced when `force` is set.
pub fn write_output(
    path: &Path,
    content: &str,
    force: bool,
    dry_run: bool,
) -> anyhow::Result<WriteOutcome> {
    if path.exists() && !force {
        println!("⚠️  Skipping existing scaffold file: {path:?} (use --force to overwrite)");
        return Ok(WriteOutcome::Skipped);
    }
    if dry_run {
        println!("📝 Would write {path:?}:\n{content}");
        return Ok(WriteOutcome::DryRun);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("✅ Generated scaffold: {path:?}");
    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_write_then_skip_then_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("service.go");

        assert_eq!(
            write_output(&path, "package a\n", false, false).unwrap(),
            WriteOutcome::Written
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "package a\n");

        assert_eq!(
            write_output(&path, "package b\n", false, false).unwrap(),
            WriteOutcome::Skipped
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "package a\n");

        assert_eq!(
            write_output(&path, "package b\n", true, false).unwrap(),
            WriteOutcome::Written
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "package b\n");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("service.go");
        assert_eq!(
            write_output(&path, "package a\n", false, true).unwrap(),
            WriteOutcome::DryRun
        );
        assert!(!path.exists());
    }
}
