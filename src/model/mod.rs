pub mod board;
pub mod message;

pub use board::*;
pub use message::*;
