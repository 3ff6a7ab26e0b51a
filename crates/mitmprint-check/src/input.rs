use std::io::Read;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("no ClientHello bytes given")]
    Empty,
}

/// Decode a hex-encoded ClientHello, ignoring whitespace and an optional
/// `0x` prefix.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, InputError> {
    let trimmed = text.trim();
    let digits: String = trimmed
        .strip_prefix("0x")
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    if digits.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(hex::decode(digits)?)
}

/// Read hex from, in order of preference: the positional argument, a file,
/// or stdin.
pub fn read_hello(arg: Option<&str>, file: Option<&Path>) -> Result<Vec<u8>, InputError> {
    if let Some(text) = arg {
        return decode_hex(text);
    }
    let mut text = String::new();
    match file {
        Some(path) => text = std::fs::read_to_string(path)?,
        None => {
            std::io::stdin().read_to_string(&mut text)?;
        }
    }
    decode_hex(&text)
}
