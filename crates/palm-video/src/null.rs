use crate::{VideoError, VideoSource};
use palm_image::Image;

/// A source that never produces a frame.
///
/// Stands in for a camera that failed to open, so the host loop keeps
/// ticking and every tick is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSource;

impl VideoSource for NullSource {
    fn has_new_frame(&mut self) -> bool {
        false
    }

    fn current_frame(&mut self) -> Result<&Image, VideoError> {
        Err(VideoError::Stream("no video source connected".to_string()))
    }
}
