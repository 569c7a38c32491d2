//! Output sink writing files into a directory.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use crate::error::{Error, Result};

use super::OutputSink;

/// Sink creating one file per output inside an existing directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Create a sink over `root`, which must already exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::OutputDirNotFound(root));
        }
        Ok(Self { root })
    }
}

impl OutputSink for DirectorySink {
    type Writer = BufWriter<File>;

    fn create(&mut self, file_name: &str) -> io::Result<BufWriter<File>> {
        Ok(BufWriter::new(File::create(self.root.join(file_name))?))
    }

    #[cfg(unix)]
    fn finish_build_script(&mut self, file_name: &str) -> io::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let path = self.root.join(file_name);
        let mut permissions = std::fs::metadata(&path)?.permissions();
        permissions.set_mode(permissions.mode() | 0o755);
        std::fs::set_permissions(path, permissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_directory() {
        let result = DirectorySink::new("/definitely/not/a/real/dir");
        assert!(matches!(result, Err(Error::OutputDirNotFound(_))));
    }

    #[test]
    fn test_create_writes_into_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path()).unwrap();
        {
            let mut file = sink.create("a.rst").unwrap();
            writeln!(file, "hello").unwrap();
        }

        let text = std::fs::read_to_string(dir.path().join("a.rst")).unwrap();
        assert_eq!(text, "hello\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_build_script_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path()).unwrap();
        drop(sink.create("make.sh").unwrap());
        sink.finish_build_script("make.sh").unwrap();

        let mode = std::fs::metadata(dir.path().join("make.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
