mod groq_client;
mod whatlang_detector;

pub use groq_client::*;
pub use whatlang_detector::*;
