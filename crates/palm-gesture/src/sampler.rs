use {
    crate::*,
    palm_image::{Image, mirror_horizontal, to_gray},
    palm_video::VideoSource,
};

/// Pulls at most one frame per tick and turns it into an owned `Gray8` frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSampler {
    mirror: bool,
}

impl Default for FrameSampler {
    fn default() -> Self {
        Self { mirror: true }
    }
}

impl FrameSampler {
    pub fn new(mirror: bool) -> Self {
        Self { mirror }
    }

    pub fn mirror(&self) -> bool {
        self.mirror
    }

    /// Returns `Ok(None)` without touching the frame when nothing new arrived.
    ///
    /// The returned frame never shares its buffer with the source.
    pub fn sample<S: VideoSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<Option<Image>, GestureError> {
        if !source.has_new_frame() {
            return Ok(None);
        }
        let mut gray = to_gray(source.current_frame()?)?;
        if self.mirror {
            mirror_horizontal(&mut gray)?;
        }
        Ok(Some(gray))
    }
}
