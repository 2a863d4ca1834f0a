use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Failure to obtain the text of a task's source file.
#[derive(Debug, thiserror::Error)]
pub enum SourceLoadError {
    #[error("source for task '{task_id}' at {} is missing or unreadable: {source}", .path.display())]
    MissingOrUnreadableSource {
        task_id: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceLoadError {
    pub fn task_id(&self) -> &str {
        match self {
            Self::MissingOrUnreadableSource { task_id, .. } => task_id,
        }
    }
}

/// Reads the text behind a descriptor's `source_path`.
///
/// Implementations return the content exactly as stored; callers attach the
/// task id when converting a failure into a [`SourceLoadError`].
pub trait SourceLoader: Debug {
    fn load(&self, path: &Path) -> io::Result<String>;

    /// Location reported in errors for `path`.
    fn resolve(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}

/// Loads sources from disk relative to a content root.
#[derive(Debug, Clone)]
pub struct FsSourceLoader {
    root: PathBuf,
}

impl FsSourceLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceLoader for FsSourceLoader {
    fn load(&self, path: &Path) -> io::Result<String> {
        // Invalid UTF-8 surfaces as io::ErrorKind::InvalidData.
        fs::read_to_string(self.resolve(path))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_relative_to_root() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("php")).expect("php dir");
        fs::write(dir.path().join("php/hello.php"), "<?php\necho 'hi';\n").expect("write");

        let loader = FsSourceLoader::new(dir.path());
        let text = loader.load(Path::new("php/hello.php")).expect("file loads");
        assert_eq!(text, "<?php\necho 'hi';\n");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loader = FsSourceLoader::new(dir.path());
        let err = loader
            .load(Path::new("php/absent.php"))
            .expect_err("absent file fails");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn non_utf8_content_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut file = fs::File::create(dir.path().join("latin1.php")).expect("create");
        file.write_all(&[0x3c, 0x3f, 0xff, 0xfe]).expect("write bytes");

        let loader = FsSourceLoader::new(dir.path());
        let err = loader
            .load(Path::new("latin1.php"))
            .expect_err("invalid utf-8 fails");
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
