use thiserror::Error;

/// Conditions surfaced to the person in front of the booth.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhotoboothError {
    #[error("Error accessing the camera: {0}")]
    CameraAcquisitionFailed(String),

    #[error("You can only take {max} photos.")]
    CaptureLimitExceeded { max: usize },

    #[error("Please wait for the current photo to finish.")]
    CaptureInProgress,

    #[error("Please take {need} photos before downloading.")]
    InsufficientFrames { have: usize, need: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_messages() {
        assert_eq!(
            PhotoboothError::CaptureLimitExceeded { max: 3 }.to_string(),
            "You can only take 3 photos."
        );
        assert_eq!(
            PhotoboothError::InsufficientFrames { have: 1, need: 3 }.to_string(),
            "Please take 3 photos before downloading."
        );
    }
}
