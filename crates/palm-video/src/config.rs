use palm_base::Vec2;
use std::path::{Path, PathBuf};

/// Capture settings requested from a device.
///
/// Devices report back the settings they actually applied, which may differ.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoConfig {
    device: PathBuf,
    size: Vec2<usize>,
    fps: u32,
    buffer_count: usize,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            device: PathBuf::from("/dev/video0"),
            size: Vec2::new(640, 480),
            fps: 30,
            buffer_count: 4,
        }
    }
}

impl VideoConfig {
    /// Set the device path (a `/dev/videoN` node, or a directory of stills).
    pub fn with_device(mut self, device: impl Into<PathBuf>) -> Self {
        self.device = device.into();
        self
    }

    pub fn with_size(mut self, size: Vec2<usize>) -> Self {
        self.size = size;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Capacity of the frame channel between the worker and the consumer.
    pub fn with_buffer_count(mut self, buffer_count: usize) -> Self {
        self.buffer_count = buffer_count;
        self
    }

    pub fn device(&self) -> &Path {
        &self.device
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn buffer_count(&self) -> usize {
        self.buffer_count.max(1)
    }
}
