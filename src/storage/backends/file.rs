use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::errors::{ReelmarkError, Result};
use crate::storage::KvStore;

/// One JSON file per key inside a data directory.
pub struct FileKvStore {
    data_dir: PathBuf,
}

impl FileKvStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();

        // 如果不存在就初始化
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).map_err(|e| {
                ReelmarkError::persistence(format!(
                    "Failed to create data directory '{}': {}",
                    data_dir.display(),
                    e
                ))
            })?;
            info!("Created data directory: {}", data_dir.display());
        }

        Ok(FileKvStore { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Location of the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.data_dir.join(format!("{}.json", key)))
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(ReelmarkError::persistence(format!(
            "Invalid storage key '{}': only [A-Za-z0-9_.-] allowed, not starting with '.'",
            key
        )))
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Read {} bytes from {}", content.len(), path.display());
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                Err(ReelmarkError::persistence(format!(
                    "Failed to read '{}': {}",
                    path.display(),
                    e
                )))
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp_path = self.data_dir.join(format!(".{}.json.tmp", key));

        // 先写临时文件再重命名，避免写到一半留下损坏的数据
        let write_result =
            fs::write(&tmp_path, value).and_then(|_| fs::rename(&tmp_path, &path));

        if let Err(e) = write_result {
            error!("Failed to write {}: {}", path.display(), e);
            let _ = fs::remove_file(&tmp_path);
            return Err(ReelmarkError::persistence(format!(
                "Failed to write '{}': {}",
                path.display(),
                e
            )));
        }

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
