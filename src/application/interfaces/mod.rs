mod completion_client;
mod language_detector;

pub use completion_client::*;
pub use language_detector::*;
