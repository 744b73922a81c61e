use super::backend::SlotBackend;
use crate::error::{DramlogError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem slot backend: each slot is one JSON file inside the configured
/// data directory.
pub struct FsBackend {
    data_dir: PathBuf,
}

impl FsBackend {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", slot))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(map_write_err)?;
        }
        Ok(())
    }
}

/// Out-of-space and quota errors surface as `QuotaExceeded`; anything else on
/// the write path means the backend cannot be written at all.
fn map_write_err(e: std::io::Error) -> DramlogError {
    match e.kind() {
        ErrorKind::StorageFull | ErrorKind::QuotaExceeded => DramlogError::QuotaExceeded,
        _ => DramlogError::StorageUnavailable(e),
    }
}

impl SlotBackend for FsBackend {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        let payload = fs::read_to_string(path).map_err(DramlogError::StorageUnavailable)?;
        Ok(Some(payload))
    }

    fn write(&self, slot: &str, payload: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.slot_path(slot);

        // Atomic write
        let tmp = self.data_dir.join(format!(".{}-{}.tmp", slot, Uuid::new_v4()));
        fs::write(&tmp, payload).map_err(map_write_err)?;
        fs::rename(&tmp, target).map_err(map_write_err)?;

        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<()> {
        let path = self.slot_path(slot);
        if path.exists() {
            fs::remove_file(path).map_err(map_write_err)?;
        }
        Ok(())
    }
}
