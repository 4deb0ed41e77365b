//! Write capability for sysctl values.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::constants::PROC_SYS_ROOT;
use crate::models::FailureReason;

/// Something that can set a sysctl value.
///
/// `key` is in normalized (slash-separated) form, relative to the sysctl
/// root.
pub trait SettingWriter {
    fn write(&mut self, key: &str, value: &str) -> Result<(), FailureReason>;
}

impl<W: SettingWriter + ?Sized> SettingWriter for &mut W {
    fn write(&mut self, key: &str, value: &str) -> Result<(), FailureReason> {
        (**self).write(key, value)
    }
}

/// Writes settings as files under a `/proc/sys`-like tree.
#[derive(Debug, Clone)]
pub struct ProcSysWriter {
    root: PathBuf,
}

impl ProcSysWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `key` under the root.
    ///
    /// Only plain path components are accepted, so a key can never name a
    /// file outside the root.
    fn path_for(&self, key: &str) -> Result<PathBuf, FailureReason> {
        let relative = key.trim_start_matches('/');
        if relative.split('/').any(|c| c.is_empty() || c == "." || c == "..") {
            return Err(FailureReason::Other("invalid key".into()));
        }
        Ok(self.root.join(relative))
    }
}

impl Default for ProcSysWriter {
    fn default() -> Self {
        Self::new(PROC_SYS_ROOT)
    }
}

impl SettingWriter for ProcSysWriter {
    fn write(&mut self, key: &str, value: &str) -> Result<(), FailureReason> {
        let path = self.path_for(key)?;

        // Never create: a missing file means the kernel lacks the setting.
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| classify_io_error(&e))?;

        // One write call per value, as the kernel parses each write separately.
        file.write_all(value.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| classify_io_error(&e))
    }
}

/// Map an I/O error onto the failure vocabulary.
pub fn classify_io_error(err: &io::Error) -> FailureReason {
    match err.raw_os_error() {
        Some(libc::EPERM) => return FailureReason::PermissionDenied,
        Some(libc::EACCES) => return FailureReason::AccessDenied,
        Some(libc::EROFS) => return FailureReason::ReadOnly,
        Some(libc::ENOENT) => return FailureReason::NotFound,
        _ => {}
    }

    match err.kind() {
        io::ErrorKind::PermissionDenied => FailureReason::AccessDenied,
        io::ErrorKind::ReadOnlyFilesystem => FailureReason::ReadOnly,
        io::ErrorKind::NotFound => FailureReason::NotFound,
        _ => FailureReason::Other(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn classifies_errno_values() {
        let cases = [
            (libc::EPERM, FailureReason::PermissionDenied),
            (libc::EACCES, FailureReason::AccessDenied),
            (libc::EROFS, FailureReason::ReadOnly),
            (libc::ENOENT, FailureReason::NotFound),
        ];
        for (errno, expected) in cases {
            assert_eq!(classify_io_error(&io::Error::from_raw_os_error(errno)), expected);
        }
    }

    #[test]
    fn other_errors_carry_message() {
        let reason = classify_io_error(&io::Error::from_raw_os_error(libc::EINVAL));
        assert!(matches!(reason, FailureReason::Other(_)));
        assert!(!reason.is_tolerable());
    }

    #[test]
    fn errors_without_errno_fall_back_to_kind() {
        let reason = classify_io_error(&io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(reason, FailureReason::NotFound);
        let reason = classify_io_error(&io::Error::other("weird"));
        assert_eq!(reason, FailureReason::Other("weird".into()));
    }

    #[test]
    fn writes_value_into_tree() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("net/ipv4")).unwrap();
        fs::write(root.path().join("net/ipv4/ip_forward"), "0\n").unwrap();

        let mut writer = ProcSysWriter::new(root.path());
        writer.write("net/ipv4/ip_forward", "1").unwrap();

        assert_eq!(fs::read_to_string(root.path().join("net/ipv4/ip_forward")).unwrap(), "1");
    }

    #[test]
    fn absent_setting_is_not_found() {
        let root = tempfile::tempdir().unwrap();
        let mut writer = ProcSysWriter::new(root.path());
        assert_eq!(writer.write("kernel/nonexistent", "1"), Err(FailureReason::NotFound));
        assert!(!root.path().join("kernel/nonexistent").exists());
    }

    #[test]
    fn keys_escaping_the_root_are_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("proc_sys");
        fs::create_dir_all(root.join("net")).unwrap();
        fs::write(tmp.path().join("victim"), "original").unwrap();

        let mut writer = ProcSysWriter::new(&root);
        for key in ["net/../../victim", "/net/../../victim", "net/./x", "net//x", "net/", ""] {
            let err = writer.write(key, "1").unwrap_err();
            assert_eq!(err, FailureReason::Other("invalid key".into()), "key: {key:?}");
            assert!(!err.is_tolerable());
        }
        assert_eq!(fs::read_to_string(tmp.path().join("victim")).unwrap(), "original");
    }

    #[test]
    fn default_root_is_proc_sys() {
        assert_eq!(ProcSysWriter::default().root(), Path::new("/proc/sys/"));
    }
}
