use serde::Serialize;

/// Order-preserving summary of the fingerprint-bearing fields of one
/// ClientHello.
///
/// Every sequence keeps wire order and duplicates. A field that was absent
/// or could not be decoded is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedHello {
    /// Legacy `client_version` (e.g. 0x0303). Zero when the fixed
    /// version + random prefix was not present.
    pub version: u16,
    /// Cipher suite values in client-chosen order
    pub cipher_suites: Vec<u16>,
    /// Extension type codes in wire order
    pub extensions: Vec<u16>,
    /// Compression method bytes
    pub compression_methods: Vec<u8>,
    /// Supported groups (from extension 0x000a)
    pub curves: Vec<u16>,
    /// EC point format values (from extension 0x000b)
    pub points: Vec<u8>,
}

impl ParsedHello {
    /// True when nothing past the fixed prefix was decoded.
    pub fn is_empty(&self) -> bool {
        self.cipher_suites.is_empty()
            && self.extensions.is_empty()
            && self.compression_methods.is_empty()
            && self.curves.is_empty()
            && self.points.is_empty()
    }
}
