use palm_image::ImageError;
use palm_video::VideoError;
use std::fmt;

/// A failure inside one tick. Never fatal to the loop.
#[derive(Debug)]
pub enum GestureError {
    Video(VideoError),
    Image(ImageError),
    Classify(String),
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureError::Video(err) => write!(f, "video error: {err}"),
            GestureError::Image(err) => write!(f, "image error: {err}"),
            GestureError::Classify(msg) => write!(f, "classifier error: {msg}"),
        }
    }
}

impl std::error::Error for GestureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GestureError::Video(err) => Some(err),
            GestureError::Image(err) => Some(err),
            GestureError::Classify(_) => None,
        }
    }
}

impl From<VideoError> for GestureError {
    fn from(err: VideoError) -> Self {
        GestureError::Video(err)
    }
}

impl From<ImageError> for GestureError {
    fn from(err: ImageError) -> Self {
        GestureError::Image(err)
    }
}
