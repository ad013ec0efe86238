use {
    crate::*,
    palm_base::Vec2,
    palm_image::{Image, PixelFormat, fourcc_to_string},
    v4l::{
        Device, Format, FourCC, buffer::Type, io::mmap::Stream as MmapStream,
        io::traits::CaptureStream, video::Capture,
    },
};

/// V4L2 webcam. Negotiates YUYV, falling back to MJPG.
pub struct V4l2Device {
    stream: Option<MmapStream<'static>>,
    size: Vec2<usize>,
    format: PixelFormat,
}

impl std::fmt::Debug for V4l2Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Device")
            .field("stream", &self.stream.is_some())
            .field("size", &self.size)
            .field("format", &self.format)
            .finish()
    }
}

impl Default for V4l2Device {
    fn default() -> Self {
        Self::new()
    }
}

impl V4l2Device {
    pub fn new() -> Self {
        Self {
            stream: None,
            size: Vec2::new(0, 0),
            format: PixelFormat::Yuyv,
        }
    }
}

// formats to ask the driver for, best first
const PREFERRED_FORMATS: [PixelFormat; 2] = [PixelFormat::Yuyv, PixelFormat::Jpeg];

fn negotiate(device: &Device, size: Vec2<usize>) -> Result<(Format, PixelFormat), VideoError> {
    for wanted in PREFERRED_FORMATS {
        let fourcc = FourCC::new(&wanted.as_fourcc().to_le_bytes());
        let actual = Capture::set_format(
            device,
            &Format::new(size.x as u32, size.y as u32, fourcc),
        )?;
        match PixelFormat::from_fourcc_bytes(actual.fourcc.repr) {
            Some(format) if format == wanted => return Ok((actual, format)),
            _ => log::debug!(
                "v4l2: asked for {}, driver offered {}",
                fourcc_to_string(wanted.as_fourcc()),
                fourcc_to_string(u32::from_le_bytes(actual.fourcc.repr))
            ),
        }
    }
    Err(VideoError::Device(
        "no supported pixel format (tried YUYV and MJPG)".to_string(),
    ))
}

impl CaptureDevice for V4l2Device {
    fn open(&mut self, config: &VideoConfig) -> Result<VideoConfig, VideoError> {
        self.stream.take();

        let device = Device::with_path(config.device())?;
        let (format, pixel_format) = negotiate(&device, config.size())?;

        self.size = Vec2::new(format.width as usize, format.height as usize);
        self.format = pixel_format;

        // set the frame rate and read back what the driver picked
        let params = Capture::set_params(
            &device,
            &v4l::video::capture::Parameters::with_fps(config.fps()),
        )?;
        let fps = if params.interval.numerator == 0 {
            config.fps()
        } else {
            params.interval.denominator / params.interval.numerator
        };

        let stream =
            MmapStream::with_buffers(&device, Type::VideoCapture, config.buffer_count() as u32)
                .map_err(|e| VideoError::Stream(e.to_string()))?;
        self.stream = Some(stream);

        Ok(config.clone().with_size(self.size).with_fps(fps))
    }

    fn close(&mut self) {
        self.stream.take();
    }

    fn blocking_capture(&mut self) -> Result<Image, VideoError> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| VideoError::Stream("No stream".to_string()))?;
        let (data, _metadata) =
            CaptureStream::next(stream).map_err(|e| VideoError::Stream(e.to_string()))?;

        // the mmap buffer is reused by the driver, so copy it out
        let mut data = data.to_vec();
        if let Some(expected) = self.format.frame_len(self.size) {
            // some drivers pad the last buffer
            data.truncate(expected);
        }
        Ok(Image::new(self.size, data, self.format))
    }
}
