use crate::domain::ports::Outbox;
use crate::utils::error::{PanelError, Result};
use std::path::{Path, PathBuf};

/// Transfer queue backed by a directory the watch side picks files up from.
/// A newer file replaces the pending one under the same name.
#[derive(Debug, Clone)]
pub struct FileOutbox {
    base_path: PathBuf,
}

impl FileOutbox {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Reads the pending file, if any. Used by the watch side of the simulator.
    pub async fn read_latest(&self, name: &str) -> Result<Option<Vec<u8>>> {
        read_inbox(&self.base_path, name).await
    }
}

impl Outbox for FileOutbox {
    async fn enqueue(&self, name: &str, data: &[u8]) -> Result<()> {
        let full_path = self.path_of(name);
        let staging = self.base_path.join(format!(".{}.partial", name));

        tokio::fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| PanelError::TransferFailure {
                message: format!("cannot create outbox {}: {}", self.base_path.display(), e),
            })?;

        // rename keeps readers from seeing a half-written payload
        tokio::fs::write(&staging, data).await?;
        if let Err(e) = tokio::fs::rename(&staging, &full_path).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(PanelError::TransferFailure {
                message: format!("cannot replace {}: {}", full_path.display(), e),
            });
        }
        tracing::debug!("Queued {} bytes at {}", data.len(), full_path.display());
        Ok(())
    }
}

pub async fn read_inbox(dir: &Path, name: &str) -> Result<Option<Vec<u8>>> {
    match tokio::fs::read(dir.join(name)).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(PanelError::IoError(e)),
    }
}
