use crate::VideoError;
use palm_image::Image;

/// A frame producer polled once per tick.
///
/// `has_new_frame` must not block. A frame handed out by `current_frame` is
/// not reported as new again.
pub trait VideoSource {
    /// True when a frame has arrived since the last `current_frame` call.
    fn has_new_frame(&mut self) -> bool;

    /// Borrow the most recent frame and mark it as seen.
    ///
    /// Returns `VideoError::Stream` when no frame has ever arrived.
    fn current_frame(&mut self) -> Result<&Image, VideoError>;
}

impl<S: VideoSource + ?Sized> VideoSource for Box<S> {
    fn has_new_frame(&mut self) -> bool {
        (**self).has_new_frame()
    }

    fn current_frame(&mut self) -> Result<&Image, VideoError> {
        (**self).current_frame()
    }
}
