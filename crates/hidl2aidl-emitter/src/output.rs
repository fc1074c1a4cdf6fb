//! Output sinks for emitted files.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use hidl2aidl_ast::FqName;

/// Supplies one writable stream per emitted file.
///
/// A stream is held only for the duration of one declaration's emission
/// and dropped afterwards.
pub trait OutputProvider: Sync {
    fn open(&self, fq_name: &FqName, relative_path: &Path) -> io::Result<Box<dyn Write + '_>>;
}

/// Collects emitted files in memory, keyed by relative path.
#[derive(Debug, Default)]
pub struct MemoryOutput {
    files: Mutex<BTreeMap<PathBuf, String>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, relative_path: impl AsRef<Path>) -> Option<String> {
        let files = self.files.lock().ok()?;
        files.get(relative_path.as_ref()).cloned()
    }

    /// Relative paths of every file written so far, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        match self.files.lock() {
            Ok(files) => files.keys().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn into_files(self) -> BTreeMap<PathBuf, String> {
        self.files
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl OutputProvider for MemoryOutput {
    fn open(&self, _fq_name: &FqName, relative_path: &Path) -> io::Result<Box<dyn Write + '_>> {
        Ok(Box::new(MemoryFile {
            owner: self,
            path: relative_path.to_path_buf(),
            buffer: Vec::new(),
        }))
    }
}

/// Buffers one file and stores it in its `MemoryOutput` on flush or drop.
struct MemoryFile<'a> {
    owner: &'a MemoryOutput,
    path: PathBuf,
    buffer: Vec<u8>,
}

impl MemoryFile<'_> {
    fn commit(&mut self) -> io::Result<()> {
        let text = String::from_utf8(self.buffer.clone())
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        let mut files = self
            .owner
            .files
            .lock()
            .map_err(|_| io::Error::other("memory output lock poisoned"))?;
        files.insert(self.path.clone(), text);
        Ok(())
    }
}

impl Write for MemoryFile<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.commit()
    }
}

impl Drop for MemoryFile<'_> {
    fn drop(&mut self) {
        let _ = self.commit();
    }
}
