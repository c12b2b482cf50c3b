use crate::device_download::interface::DeviceDownload;
use crate::library::logger::interface::Logger;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct DeviceDownloadFileSystem {
    dir: PathBuf,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceDownloadFileSystem {
    pub fn new(dir: impl Into<PathBuf>, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            dir: dir.into(),
            logger: logger.with_namespace("download").with_namespace("file_system"),
        }
    }
}

impl DeviceDownload for DeviceDownloadFileSystem {
    fn download(
        &self,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        // Only the final component of the name is honored.
        let name = Path::new(file_name)
            .file_name()
            .ok_or_else(|| format!("Invalid file name: {:?}", file_name))?;

        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        std::fs::write(&path, bytes)?;

        self.logger
            .info(&format!("Wrote {} bytes to {}", bytes.len(), path.display()))?;
        Ok(path)
    }
}
