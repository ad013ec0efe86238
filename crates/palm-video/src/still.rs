use {
    crate::*,
    palm_image::{Image, load_image},
    std::{
        path::{Path, PathBuf},
        thread,
        time::{Duration, Instant},
    },
};

const STILL_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/// Replays a directory of still images as a camera, looping forever.
///
/// Files are played in name order, paced to the configured frame rate.
/// Useful for running the dispatch loop on a machine without a camera.
#[derive(Debug, Default)]
pub struct StillFrames {
    files: Vec<PathBuf>,
    next: usize,
    interval: Duration,
    last_capture: Option<Instant>,
}

impl StillFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Image files found by the last `open`, in playback order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

fn list_stills(dir: &Path) -> Result<Vec<PathBuf>, VideoError> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| STILL_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

impl CaptureDevice for StillFrames {
    fn open(&mut self, config: &VideoConfig) -> Result<VideoConfig, VideoError> {
        let files = list_stills(config.device())?;
        if files.is_empty() {
            return Err(VideoError::Device(format!(
                "no image files in {}",
                config.device().display()
            )));
        }

        // report the size of the first still as the stream size
        let first = load_image(&files[0])?;
        self.files = files;
        self.next = 0;
        self.interval = Duration::from_secs_f64(1.0 / config.fps().max(1) as f64);
        self.last_capture = None;

        Ok(config.clone().with_size(first.size))
    }

    fn close(&mut self) {
        self.files.clear();
        self.last_capture = None;
    }

    fn blocking_capture(&mut self) -> Result<Image, VideoError> {
        if self.files.is_empty() {
            return Err(VideoError::Stream("still player is not open".to_string()));
        }

        if let Some(last) = self.last_capture {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                thread::sleep(self.interval - elapsed);
            }
        }
        self.last_capture = Some(Instant::now());

        let path = &self.files[self.next];
        self.next = (self.next + 1) % self.files.len();
        Ok(load_image(path)?)
    }
}
