//! Video sources for the palm gesture pipeline.
//!
//! Everything the dispatch loop reads from implements [`VideoSource`]: a
//! non-blocking "is there a new frame" check plus access to the latest frame.
//! [`VideoIn`] drives any [`CaptureDevice`] on a worker thread and exposes it
//! as a `VideoSource`.

pub mod config;
pub mod error;
pub mod null;
pub mod source;
pub mod still;
pub mod videoin;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::VideoConfig;
pub use error::VideoError;
pub use null::NullSource;
pub use source::VideoSource;
pub use still::StillFrames;
pub use videoin::{CaptureDevice, VideoIn};

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Device;
