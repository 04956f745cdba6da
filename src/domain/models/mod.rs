mod conversation;
mod language;
mod message;

pub use conversation::*;
pub use language::*;
pub use message::*;
