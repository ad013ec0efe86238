//! Frame buffers and pixel conversions for the palm gesture pipeline.
//!
//! An [`Image`] is a tightly packed buffer tagged with its [`PixelFormat`].
//! Capture back ends produce whatever the device delivers; the dispatch loop
//! only ever classifies [`PixelFormat::Gray8`] frames produced by [`to_gray`].

mod decode;
pub use decode::*;

mod display;
pub use display::*;

mod error;
pub use error::*;

mod gray;
pub use gray::*;

mod image;
pub use image::*;

mod mirror;
pub use mirror::*;

mod pixelformat;
pub use pixelformat::*;
