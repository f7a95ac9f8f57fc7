use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use super::{Storage, StorageError};

/// Directory-backed storage: one file per key.
///
/// Keys such as `@RocketShoes:cart` are not valid file names everywhere.
/// Bytes outside `[A-Za-z0-9._-]` are written as `%XX` (the `%` itself
/// included), so distinct keys always land in distinct files.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens (and creates, if needed) the storage directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(key)))
    }

    fn io_error(key: &str, source: std::io::Error) -> StorageError {
        StorageError::Io {
            key: key.to_string(),
            source,
        }
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        // Write to a sibling file first so a crash never leaves half a value.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|e| Self::io_error(key, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| Self::io_error(key, e))?;
        debug!(path = %path.display(), bytes = value.len(), "Stored value");
        Ok(())
    }
}

fn file_stem(key: &str) -> String {
    let mut stem = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'_' | b'-') {
            stem.push(char::from(byte));
        } else {
            stem.push_str(&format!("%{byte:02X}"));
        }
    }
    stem
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();

        let storage = FileStorage::open(dir.path()).unwrap();
        storage.set_item("@RocketShoes:cart", "[]").unwrap();

        let reopened = FileStorage::open(dir.path()).unwrap();
        assert_eq!(
            reopened.get_item("@RocketShoes:cart").unwrap().as_deref(),
            Some("[]")
        );
        assert!(dir.path().join("%40RocketShoes%3Acart.json").exists());
    }

    #[test]
    fn missing_keys_read_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("nested")).unwrap();

        assert_eq!(storage.get_item("absent").unwrap(), None);
        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn keys_that_differ_only_in_escaped_bytes_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();

        storage.set_item("@RocketShoes:cart", "a").unwrap();
        storage.set_item("_RocketShoes_cart", "b").unwrap();
        storage.set_item("%40RocketShoes%3Acart", "c").unwrap();

        assert_eq!(storage.get_item("@RocketShoes:cart").unwrap().as_deref(), Some("a"));
        assert_eq!(storage.get_item("_RocketShoes_cart").unwrap().as_deref(), Some("b"));
        assert_eq!(storage.get_item("%40RocketShoes%3Acart").unwrap().as_deref(), Some("c"));
    }

    #[test]
    fn file_stem_escapes_percent_and_non_ascii() {
        assert_eq!(file_stem("cart-v1.2_x"), "cart-v1.2_x");
        assert_eq!(file_stem("%"), "%25");
        assert_eq!(file_stem("ç"), "%C3%A7");
    }

    #[test]
    fn unwritable_directory_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        drop(dir);

        let err = storage.set_item("k", "v").unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
    }
}
