use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

use crate::error::{ConvertError, ConvertResult};

/// Writes `content` to `path`, replacing the contents of any existing file.
///
/// A symlinked `path` is followed so the link target receives the HTML, and an
/// existing file keeps its permissions. The bytes go to a temporary file in
/// the destination directory first, so a failed write leaves the previous
/// output (or no output) behind.
pub fn write_output(path: &Path, content: &str) -> ConvertResult<()> {
    let target = resolve_target(path);
    persist_html(&target, content).map_err(|err| ConvertError::io(path, err))?;

    log::debug!("wrote {} bytes to {}", content.len(), target.display());
    Ok(())
}

fn resolve_target(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => {
            fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

fn persist_html(target: &Path, content: &str) -> io::Result<()> {
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = Builder::new().prefix(".markdown2html").tempfile_in(parent)?;
    tmp.as_file_mut().write_all(content.as_bytes())?;
    tmp.as_file_mut().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // temp files start out as 0600; new outputs get the usual 0644
        let mode = fs::metadata(target)
            .map(|metadata| metadata.permissions().mode())
            .unwrap_or(0o644);
        fs::set_permissions(tmp.path(), fs::Permissions::from_mode(mode))?;
    }

    tmp.persist(target).map(|_| ()).map_err(|err| err.error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("out.html");

        write_output(&file_path, "<p>").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "<p>");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn new_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("out.html");

        write_output(&file_path, "<p>").unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn truncates_existing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("out.html");
        fs::write(&file_path, "a much longer previous body").unwrap();

        write_output(&file_path, "short").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "short");
    }

    #[cfg(unix)]
    #[test]
    fn writes_through_symlink_to_target() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("real.html");
        let link = dir.path().join("link.html");
        fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_output(&link, "new").unwrap();

        assert!(fs::symlink_metadata(&link)
            .unwrap()
            .file_type()
            .is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("out.html");
        fs::write(&file_path, "old").unwrap();
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o600)).unwrap();

        write_output(&file_path, "new").unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new");
    }

    #[test]
    fn reports_unwritable_destination() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("no-such-dir").join("out.html");

        let err = write_output(&file_path, "x").unwrap_err();

        assert!(matches!(err, ConvertError::Io { .. }));
    }
}
