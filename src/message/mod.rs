//! Parsed IRC message representation and the line parser behind it.

mod parse;
mod types;

pub use self::types::Message;
