pub mod coding;
pub mod list;

pub use coding::ContentCoding;
pub use list::{iter_from_str, parse, parse_tokens};
