use md5::{Digest, Md5};
use serde::Serialize;

use crate::fingerprint::placeholder::filter_grease;
use crate::hello::ParsedHello;

/// Result of a JA3 fingerprint computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ja3Result {
    /// 32-character MD5 hex hash
    pub hash: String,
    /// The raw string before hashing
    pub raw_string: String,
}

/// Compute the JA3 fingerprint of a parsed ClientHello.
///
/// JA3 format: MD5(SSLVersion,Ciphers,Extensions,EllipticCurves,EcPointFormats)
///
/// Values are decimal and dash-joined. GREASE is dropped from the 16-bit
/// lists; the legacy SCSV is a real cipher value here and is kept.
pub fn compute_ja3(hello: &ParsedHello) -> Ja3Result {
    let raw_string = format!(
        "{},{},{},{},{}",
        hello.version,
        join(&filter_grease(&hello.cipher_suites)),
        join(&filter_grease(&hello.extensions)),
        join(&filter_grease(&hello.curves)),
        join(&hello.points),
    );

    let mut hasher = Md5::new();
    hasher.update(raw_string.as_bytes());
    let hash = format!("{:x}", hasher.finalize());

    Ja3Result { hash, raw_string }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("-")
}
