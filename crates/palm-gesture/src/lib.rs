//! Per-tick gesture dispatch.
//!
//! Once per host tick: if the video source has a new frame, convert it to
//! grayscale, ask a [`Classifier`] for a finger count, map the count to an
//! [`ActionCommand`] with [`dispatch`], and invoke exactly one
//! [`ActionHandler`] method. Nothing survives from one tick to the next
//! except counters.
//!
//! ```no_run
//! use palm_gesture::{ConstantClassifier, FrameSampler, TraceHandler, tick};
//! use palm_video::NullSource;
//!
//! let sampler = FrameSampler::default();
//! let mut source = NullSource;
//! let mut classifier = ConstantClassifier::default();
//! let mut handler = TraceHandler;
//! let outcome = tick(&sampler, &mut source, &mut classifier, &mut handler);
//! assert!(outcome.is_skipped());
//! ```

pub mod action;
pub mod classifier;
pub mod config;
pub mod driver;
pub mod error;
pub mod handler;
pub mod sampler;
pub mod stats;
pub mod tick;

pub use action::{ActionCommand, dispatch};
pub use classifier::{Classifier, ConstantClassifier, ScriptedClassifier};
pub use config::GestureConfig;
pub use driver::GestureLoop;
pub use error::GestureError;
pub use handler::{ActionHandler, TraceHandler};
pub use sampler::FrameSampler;
pub use stats::{FrameRate, TickStats};
pub use tick::{TickOutcome, tick, tick_with};
