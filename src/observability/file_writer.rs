//! Rotating log file with size-based rotation and backup retention.
//!
//! [`RotatingFileWriter`] is handed to `tracing_subscriber`'s fmt layer as its
//! `MakeWriter`. Every formatted record is written under one lock, so lines
//! from concurrent worker threads never interleave.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// When the current file exceeds the size limit it is renamed to
/// `<name>.<ext>.<unix_millis>` and a fresh file is started. Backups beyond the
/// retention limit are removed, oldest first.
///
/// Cloning is cheap; clones share the same file handle.
///
/// # Example
///
/// ```rust
/// use justdo::observability::RotatingFileWriter;
/// use std::io::Write;
///
/// let dir = std::env::temp_dir().join("justdo-doc-log");
/// std::fs::create_dir_all(&dir).unwrap();
/// let mut writer = RotatingFileWriter::new(dir.join("justdo.log"));
/// writer.write_all(b"{\"msg\":\"hello\"}\n").unwrap();
/// ```
#[derive(Clone)]
pub struct RotatingFileWriter {
    inner: Arc<Inner>,
}

struct Inner {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Opened lazily on first write.
    file: Mutex<Option<File>>,
}

impl RotatingFileWriter {
    /// Creates a writer for `file_path` with the default limits (10 MB, 3 backups).
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer with explicit rotation limits.
    #[must_use]
    pub fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                file_path,
                max_bytes,
                max_backups,
                file: Mutex::new(None),
            }),
        }
    }

    /// Path of the live log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.inner.file_path
    }

    /// Appends one record, rotating first if the file is over the limit.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors (permissions, disk full) or if the lock was
    /// poisoned by a panicking writer.
    pub fn write_record(&self, record: &[u8]) -> io::Result<()> {
        let mut guard = self
            .inner
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.inner.check_and_rotate(&mut guard)?;

        if guard.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.inner.file_path)?;
            *guard = Some(file);
        }

        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(record)?;
        file.flush()?;
        drop(guard);

        Ok(())
    }
}

impl Inner {
    fn check_and_rotate(&self, file: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *file = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        self.file_path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("log")
    }

    fn rotate_files(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().timestamp_millis();
        let backup_path = self
            .file_path
            .with_extension(format!("{}.{stamp}", self.extension()));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// Removes backups beyond the retention limit, newest kept.
    ///
    /// Individual deletion failures are ignored so one stuck file does not
    /// stop the rest of the cleanup.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;

        let file_name = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;
        let backup_prefix = format!("{file_name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&backup_prefix))
            })
            .collect();

        // newest first; file names carry the millisecond stamp as a tiebreak
        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time).then_with(|| b.cmp(a))
        });

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl Write for RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_record(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RotatingFileWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl std::fmt::Debug for RotatingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileWriter")
            .field("file_path", &self.inner.file_path)
            .field("max_bytes", &self.inner.max_bytes)
            .finish_non_exhaustive()
    }
}
