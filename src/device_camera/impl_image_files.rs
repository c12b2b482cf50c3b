use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

const EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Plays back still images from a directory as if they were live frames,
/// cycling in file-name order.
pub struct DeviceCameraImageFiles {
    dir: PathBuf,
    paths: Mutex<Vec<PathBuf>>,
    next: Mutex<usize>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraImageFiles {
    pub fn new(dir: impl Into<PathBuf>, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            dir: dir.into(),
            paths: Mutex::new(vec![]),
            next: Mutex::new(0),
            logger: logger.with_namespace("camera").with_namespace("image_files"),
        }
    }

    fn list_images(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        let mut paths = vec![];
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let is_image = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| EXTENSIONS.contains(&ext.to_lowercase().as_str()))
                .unwrap_or(false);
            if is_image {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

impl DeviceCamera for DeviceCameraImageFiles {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("Opening image directory {}", self.dir.display()))?;
        let found = Self::list_images(&self.dir)?;
        if found.is_empty() {
            return Err(format!("No images found in {}", self.dir.display()).into());
        }
        self.logger.info(&format!("Found {} images", found.len()))?;
        *self.paths.lock().map_err(|e| e.to_string())? = found;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.paths.lock().map_err(|e| e.to_string())?.clear();
        Ok(())
    }

    fn capture_frame(&self) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
        let paths = self.paths.lock().map_err(|e| e.to_string())?;
        if paths.is_empty() {
            return Err("Camera not started".into());
        }
        let mut next = self.next.lock().map_err(|e| e.to_string())?;
        let path = &paths[*next % paths.len()];
        *next += 1;

        self.logger
            .info(&format!("Capturing frame from {}", path.display()))?;
        Ok(image::open(path)?)
    }
}
