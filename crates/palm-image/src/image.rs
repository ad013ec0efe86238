use {
    crate::*,
    palm_base::Vec2,
};

/// A single frame: `size` in pixels, raw bytes laid out per `format`.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl Image {
    pub fn new(size: Vec2<usize>, data: Vec<u8>, format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    /// Black grayscale frame of the given size.
    pub fn gray(size: Vec2<usize>) -> Self {
        Self::new(size, vec![0u8; size.area()], PixelFormat::Gray8)
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    /// Check that `data` holds exactly one frame of `size` in `format`.
    ///
    /// JPEG payloads are variable length; only emptiness is rejected.
    /// A size too large to address is reported as `expected: usize::MAX`.
    pub fn validate(&self) -> Result<(), ImageError> {
        let got = self.data.len();
        if self.format == PixelFormat::Jpeg {
            if got == 0 {
                return Err(ImageError::Decode("empty JPEG payload".to_string()));
            }
            return Ok(());
        }
        match self.format.frame_len(self.size) {
            Some(expected) if expected == got => Ok(()),
            Some(expected) => Err(ImageError::Size { expected, got }),
            None => Err(ImageError::Size {
                expected: usize::MAX,
                got,
            }),
        }
    }
}
