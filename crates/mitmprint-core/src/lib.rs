//! ClientHello fingerprinting for spotting TLS interception.
//!
//! [`hello::parse_hello`] turns a raw ClientHello into a [`ParsedHello`];
//! [`fingerprint::classify`] checks it against fixed browser signatures.
//! A caller that also knows the claimed client (e.g. from the User-Agent)
//! can flag a mismatch as a likely intercepting proxy.

pub mod fingerprint;
pub mod hello;

#[cfg(test)]
pub(crate) mod samples;

pub use fingerprint::{classify, Browser, Classification};
pub use hello::{parse_hello, ParsedHello};
