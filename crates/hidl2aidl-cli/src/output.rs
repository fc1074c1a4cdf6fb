use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use hidl2aidl_ast::FqName;
use hidl2aidl_emitter::OutputProvider;

/// Writes each emitted file below a root directory, creating package
/// directories as needed.
#[derive(Debug, Clone)]
pub struct DirectoryOutput {
    root: PathBuf,
}

impl DirectoryOutput {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirectoryOutput { root: root.into() }
    }
}

impl OutputProvider for DirectoryOutput {
    fn open(&self, fq_name: &FqName, relative_path: &Path) -> io::Result<Box<dyn Write + '_>> {
        let path = self.root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        tracing::trace!(%fq_name, path = %path.display(), "opening output file");
        Ok(Box::new(BufWriter::new(File::create(&path)?)))
    }
}
