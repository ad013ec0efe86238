use crate::PixelFormat;
use std::fmt;

#[derive(Debug)]
pub enum ImageError {
    Decode(String),
    Size { expected: usize, got: usize },
    Unsupported(PixelFormat),
    Io(std::io::Error),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Decode(msg) => write!(f, "decode error: {msg}"),
            ImageError::Size { expected, got } => {
                write!(f, "buffer size mismatch: expected {expected} bytes, got {got}")
            }
            ImageError::Unsupported(format) => write!(f, "unsupported pixel format: {format:?}"),
            ImageError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for ImageError {}

impl From<crates_image::ImageError> for ImageError {
    fn from(err: crates_image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for ImageError {
    fn from(err: std::io::Error) -> Self {
        ImageError::Io(err)
    }
}
