pub mod cursor;
pub mod parse;
pub mod types;

pub use parse::parse_hello;
pub use types::ParsedHello;
