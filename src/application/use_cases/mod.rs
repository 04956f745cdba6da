mod respond;

pub use respond::*;
