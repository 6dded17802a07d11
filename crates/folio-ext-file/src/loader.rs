//! Memoizing CSV table loader.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use dashmap::DashMap;
use folio_core::{FolioError, FolioResult, WideTable};
use tracing::debug;

use crate::csv_table::read_table;

/// A loaded table and the file modification time it was read at.
#[derive(Debug, Clone)]
struct CachedTable {
    modified: Option<SystemTime>,
    table: Arc<WideTable>,
}

/// CSV table loader with a per-path cache.
///
/// Entries are keyed by canonical path, so `./data/x.csv` and an absolute
/// path to the same file share one entry. A cached entry is reused while
/// the file's modification time is unchanged and re-read otherwise.
#[derive(Debug, Default)]
pub struct CsvTableLoader {
    cache: DashMap<PathBuf, CachedTable>,
}

impl CsvTableLoader {
    /// Creates a loader with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a table, reusing the cached copy when the file is unchanged.
    ///
    /// # Errors
    ///
    /// - `MissingFile` if the path does not exist
    /// - `MalformedInput` if the content cannot be parsed
    /// - `Io` for other read failures
    pub fn load(&self, path: impl AsRef<Path>) -> FolioResult<Arc<WideTable>> {
        let path = path.as_ref();
        let key = canonical(path)?;
        let modified = std::fs::metadata(&key).and_then(|m| m.modified()).ok();

        if let Some(entry) = self.cache.get(&key) {
            if entry.modified == modified {
                debug!(path = %key.display(), "table cache hit");
                return Ok(Arc::clone(&entry.table));
            }
            debug!(path = %key.display(), "file changed on disk, reloading");
        } else {
            debug!(path = %key.display(), "table cache miss");
        }

        let table = Arc::new(read_table(&key)?);
        debug!(
            path = %key.display(),
            rows = table.nrows(),
            columns = table.ncols(),
            "loaded table"
        );
        self.cache.insert(
            key,
            CachedTable {
                modified,
                table: Arc::clone(&table),
            },
        );
        Ok(table)
    }

    /// Drops every cached table.
    pub fn clear(&self) {
        self.cache.clear();
    }

    /// Drops the cached table for one path. Returns true if an entry was removed.
    pub fn invalidate(&self, path: impl AsRef<Path>) -> bool {
        canonical(path.as_ref())
            .map(|key| self.cache.remove(&key).is_some())
            .unwrap_or(false)
    }

    /// Returns true if a table for this path is cached.
    #[must_use]
    pub fn is_cached(&self, path: impl AsRef<Path>) -> bool {
        canonical(path.as_ref())
            .map(|key| self.cache.contains_key(&key))
            .unwrap_or(false)
    }

    /// Number of cached tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

fn canonical(path: &Path) -> FolioResult<PathBuf> {
    path.canonicalize().map_err(|e| {
        let name = path.display().to_string();
        match e.kind() {
            io::ErrorKind::NotFound => FolioError::missing_file(name),
            _ => FolioError::io(name, e.to_string()),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;

    const PRICES: &str = "date,Asset1,Asset2\n2024-01-02,100,50\n2024-01-03,110,51\n";

    #[test]
    fn test_load_and_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.csv");
        fs::write(&path, PRICES).unwrap();

        let loader = CsvTableLoader::new();
        let first = loader.load(&path).unwrap();
        let second = loader.load(&path).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(loader.len(), 1);
        assert!(loader.is_cached(&path));
        assert_eq!(first.nrows(), 2);
    }

    #[test]
    fn test_equivalent_paths_share_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.csv");
        fs::write(&path, PRICES).unwrap();

        let loader = CsvTableLoader::new();
        let a = loader.load(&path).unwrap();
        let b = loader.load(dir.path().join(".").join("prices.csv")).unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(loader.len(), 1);
    }

    #[test]
    fn test_clear_and_invalidate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.csv");
        fs::write(&path, PRICES).unwrap();

        let loader = CsvTableLoader::new();
        let first = loader.load(&path).unwrap();

        assert!(loader.invalidate(&path));
        assert!(!loader.invalidate(&path));
        let second = loader.load(&path).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);

        loader.clear();
        assert!(loader.is_empty());
    }

    #[test]
    fn test_reloads_when_modified() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.csv");
        fs::write(&path, PRICES).unwrap();

        let loader = CsvTableLoader::new();
        let before = loader.load(&path).unwrap();

        fs::write(&path, "date,Asset1\n2024-01-02,1\n").unwrap();
        let file = fs::File::options().write(true).open(&path).unwrap();
        file.set_modified(SystemTime::now() + Duration::from_secs(60))
            .unwrap();

        let after = loader.load(&path).unwrap();
        assert_eq!(before.ncols(), 2);
        assert_eq!(after.ncols(), 1);
        assert_eq!(loader.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loader = CsvTableLoader::new();
        let err = loader.load(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, FolioError::MissingFile { .. }));
        assert!(loader.is_empty());
    }

    #[test]
    fn test_malformed_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "date,A\n2024-01-02,x\n").unwrap();

        let loader = CsvTableLoader::new();
        let err = loader.load(&path).unwrap_err();
        assert!(matches!(err, FolioError::MalformedInput { .. }));
        assert!(!loader.is_cached(&path));
    }
}
