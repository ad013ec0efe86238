use {
    crate::*,
    palm_base::Vec2,
    palm_image::Image,
    std::{
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
        thread::{self, JoinHandle},
        time::Duration,
    },
    tokio::sync::{
        mpsc::{
            self,
            error::{TryRecvError, TrySendError},
        },
        oneshot,
    },
};

// delay before reconnecting after failure
const WAIT_BEFORE_RECONNECT_MS: u64 = 100;

/// A blocking frame grabber driven by the [`VideoIn`] worker thread.
///
/// `open` and `blocking_capture` are always called from the same thread.
pub trait CaptureDevice: Send {
    /// Open the device and return the configuration that was actually applied.
    fn open(&mut self, config: &VideoConfig) -> Result<VideoConfig, VideoError>;

    /// Close the device, if open.
    fn close(&mut self);

    /// Wait for and return the next frame.
    fn blocking_capture(&mut self) -> Result<Image, VideoError>;
}

/// Threaded capture front end.
///
/// A worker thread pumps frames from a [`CaptureDevice`] into a bounded
/// channel, dropping frames while the channel is full. If capture fails the
/// worker closes the device and keeps trying to reopen it until the
/// `VideoIn` is dropped. The consumer side never blocks: each
/// `has_new_frame` call drains the channel and keeps only the newest frame.
pub struct VideoIn {
    receiver: mpsc::Receiver<Image>,
    cancel: Arc<AtomicBool>,
    config: VideoConfig,
    latest: Option<Image>,
    fresh: bool,
    connected: bool,
    join_handle: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for VideoIn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoIn")
            .field("config", &self.config)
            .field("fresh", &self.fresh)
            .field("connected", &self.connected)
            .finish()
    }
}

impl VideoIn {
    /// Start a worker for `device` and wait until it has opened.
    ///
    /// # Errors
    ///
    /// Returns the device's own error if the first `open` fails, or
    /// `VideoError::Device` if the worker thread cannot be spawned.
    pub fn open(device: impl CaptureDevice + 'static, config: VideoConfig) -> Result<Self, VideoError> {
        Self::open_boxed(Box::new(device), config)
    }

    pub fn open_boxed(
        mut device: Box<dyn CaptureDevice>,
        config: VideoConfig,
    ) -> Result<Self, VideoError> {
        let (sender, receiver) = mpsc::channel::<Image>(config.buffer_count());
        let cancel = Arc::new(AtomicBool::new(false));

        // the worker reports the applied config (or the open error) exactly once
        let (init_tx, init_rx) = oneshot::channel::<Result<VideoConfig, VideoError>>();

        let join_handle = thread::Builder::new()
            .name("palm-video".to_string())
            .spawn({
                let cancel = Arc::clone(&cancel);
                let requested = config.clone();
                move || {
                    let mut active = match device.open(&requested) {
                        Ok(active) => {
                            let _ = init_tx.send(Ok(active.clone()));
                            active
                        }
                        Err(e) => {
                            let _ = init_tx.send(Err(e));
                            return;
                        }
                    };
                    pump_frames(device.as_mut(), &mut active, &sender, &cancel);
                    device.close();
                }
            })?;

        let config = match init_rx.blocking_recv() {
            Ok(Ok(config)) => config,
            Ok(Err(e)) => {
                let _ = join_handle.join();
                return Err(e);
            }
            Err(_) => {
                return Err(VideoError::Device(
                    "video worker died during init".to_string(),
                ));
            }
        };
        log::info!(
            "video: opened {} at {} ({} fps)",
            config.device().display(),
            config.size(),
            config.fps()
        );

        Ok(Self {
            receiver,
            cancel,
            config,
            latest: None,
            fresh: false,
            connected: true,
            join_handle: Some(join_handle),
        })
    }

    /// Configuration the device reported after opening.
    pub fn config(&self) -> &VideoConfig {
        &self.config
    }

    pub fn size(&self) -> Vec2<usize> {
        self.config.size()
    }

    /// False once the worker thread has exited; no further frames will arrive.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    fn drain(&mut self) {
        loop {
            match self.receiver.try_recv() {
                Ok(frame) => {
                    self.latest = Some(frame);
                    self.fresh = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.connected {
                        log::warn!("video: worker stopped, no further frames");
                        self.connected = false;
                    }
                    break;
                }
            }
        }
    }
}

impl VideoSource for VideoIn {
    fn has_new_frame(&mut self) -> bool {
        self.drain();
        self.fresh
    }

    fn current_frame(&mut self) -> Result<&Image, VideoError> {
        self.fresh = false;
        self.latest
            .as_ref()
            .ok_or_else(|| VideoError::Stream("no frame captured yet".to_string()))
    }
}

impl Drop for VideoIn {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        // wakes a worker waiting on a full channel
        self.receiver.close();
        if let Some(handle) = self.join_handle.take() {
            let _ = handle.join();
        }
    }
}

fn pump_frames(
    device: &mut dyn CaptureDevice,
    config: &mut VideoConfig,
    sender: &mpsc::Sender<Image>,
    cancel: &AtomicBool,
) {
    while !cancel.load(Ordering::Relaxed) {
        // keep pumping frames until capturing fails
        while !cancel.load(Ordering::Relaxed) {
            match device.blocking_capture() {
                Ok(frame) => match sender.try_send(frame) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        log::debug!("video worker: consumer is behind, frame dropped");
                    }
                    Err(TrySendError::Closed(_)) => return,
                },
                Err(e) => {
                    log::error!("video worker: capture failed: {}", e);
                    break;
                }
            }
        }

        // close, wait, and reopen the device
        while !cancel.load(Ordering::Relaxed) {
            log::info!("video worker: reconnecting...");
            device.close();
            thread::sleep(Duration::from_millis(WAIT_BEFORE_RECONNECT_MS));
            match device.open(config) {
                Ok(reopened) => {
                    *config = reopened;
                    break;
                }
                Err(e) => log::debug!("video worker: reopen failed: {}", e),
            }
        }
    }
}
