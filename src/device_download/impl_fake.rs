use crate::device_download::interface::DeviceDownload;
use crate::library::logger::interface::Logger;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Keeps downloads in memory.
#[allow(dead_code)]
pub struct DeviceDownloadFake {
    downloads: Mutex<Vec<(String, Vec<u8>)>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

#[allow(dead_code)]
impl DeviceDownloadFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            downloads: Mutex::new(vec![]),
            logger: logger.with_namespace("download").with_namespace("fake"),
        }
    }

    pub fn downloads(&self) -> Vec<(String, Vec<u8>)> {
        self.downloads
            .lock()
            .map(|downloads| downloads.clone())
            .unwrap_or_default()
    }
}

impl DeviceDownload for DeviceDownloadFake {
    fn download(
        &self,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("download({}, {} bytes)", file_name, bytes.len()))?;
        self.downloads
            .lock()
            .map_err(|e| e.to_string())?
            .push((file_name.to_string(), bytes.to_vec()));
        Ok(PathBuf::from(file_name))
    }
}
