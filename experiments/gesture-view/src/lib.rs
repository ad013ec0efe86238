pub mod input;
pub mod options;

pub use input::{HostClassifier, signal_for_key};
pub use options::Options;
