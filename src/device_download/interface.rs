use std::path::PathBuf;

/// Hands the finished artifact to the user.
pub trait DeviceDownload {
    /// Returns where the artifact ended up.
    fn download(
        &self,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>>;
}
