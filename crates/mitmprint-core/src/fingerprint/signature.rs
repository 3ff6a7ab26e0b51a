use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::fingerprint::placeholder::is_placeholder;
use crate::hello::ParsedHello;

/// Browser families with a TLS stack worth protecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Chrome,
    Firefox,
    Safari,
    Edge,
}

impl Browser {
    pub const ALL: [Browser; 4] = [
        Browser::Chrome,
        Browser::Firefox,
        Browser::Safari,
        Browser::Edge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Firefox => "firefox",
            Browser::Safari => "safari",
            Browser::Edge => "edge",
        }
    }

    /// The fixed signature for this family. `None` for Edge: no verified
    /// sample exists yet, so Edge never matches.
    pub fn signature(self) -> Option<&'static Signature> {
        match self {
            Browser::Chrome => Some(&CHROME),
            Browser::Firefox => Some(&FIREFOX),
            Browser::Safari => Some(&SAFARI),
            Browser::Edge => None,
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
#[error("unknown browser family '{0}' (expected chrome, firefox, safari or edge)")]
pub struct UnknownBrowser(pub String);

impl FromStr for Browser {
    type Err = UnknownBrowser;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Browser::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownBrowser(s.to_string()))
    }
}

/// One position in a signature sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Exact(u16),
    /// Any placeholder value (GREASE or the legacy SCSV).
    Placeholder,
}

impl Slot {
    pub fn matches(self, value: u16) -> bool {
        match self {
            Slot::Exact(expected) => value == expected,
            Slot::Placeholder => is_placeholder(value),
        }
    }
}

/// Whether placeholder values may, must, or must not appear in a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Forbidden,
    Allowed,
}

impl Presence {
    fn check(self, values: &[u16]) -> bool {
        let found = values.iter().any(|&v| is_placeholder(v));
        match self {
            Presence::Required => found,
            Presence::Forbidden => !found,
            Presence::Allowed => true,
        }
    }
}

/// Fixed match rule for one browser family.
#[derive(Debug)]
pub struct Signature {
    pub browser: Browser,
    /// Cipher suites the hello must open with, contiguously.
    pub cipher_prefix: &'static [Slot],
    /// Extension types that must appear in this relative order. Other
    /// extensions may sit between them.
    pub extension_order: &'static [Slot],
    /// Supported groups the list must open with, contiguously.
    pub curve_prefix: &'static [Slot],
    /// Exact compression method list.
    pub compression_methods: &'static [u8],
    pub forbidden_ciphers: &'static [u16],
    pub forbidden_curves: &'static [u16],
    pub cipher_placeholders: Presence,
    pub extension_placeholders: Presence,
}

impl Signature {
    pub fn matches(&self, hello: &ParsedHello) -> bool {
        self.cipher_placeholders.check(&hello.cipher_suites)
            && self.extension_placeholders.check(&hello.extensions)
            && hello.compression_methods == self.compression_methods
            && starts_with(&hello.cipher_suites, self.cipher_prefix)
            && starts_with(&hello.curves, self.curve_prefix)
            && contains_in_order(&hello.extensions, self.extension_order)
            && !hello.cipher_suites.iter().any(|c| self.forbidden_ciphers.contains(c))
            && !hello.curves.iter().any(|c| self.forbidden_curves.contains(c))
    }
}

/// `values` opens with `slots`, position by position.
pub fn starts_with(values: &[u16], slots: &[Slot]) -> bool {
    values.len() >= slots.len() && slots.iter().zip(values).all(|(s, &v)| s.matches(v))
}

/// `slots` is a subsequence of `values`. Greedy single pass.
pub fn contains_in_order(values: &[u16], slots: &[Slot]) -> bool {
    let mut values = values.iter();
    slots.iter().all(|slot| values.any(|&v| slot.matches(v)))
}

use Slot::{Exact, Placeholder};

/// BoringSSL as shipped in Chrome 56: GREASE cipher first, AES-GCM before
/// ChaCha20, no CBC-SHA2 suites, GREASE extensions at both ends, no P-521.
pub static CHROME: Signature = Signature {
    browser: Browser::Chrome,
    cipher_prefix: &[
        Placeholder,
        Exact(0xC02B), // ECDHE_ECDSA_WITH_AES_128_GCM_SHA256
        Exact(0xC02F), // ECDHE_RSA_WITH_AES_128_GCM_SHA256
        Exact(0xC02C), // ECDHE_ECDSA_WITH_AES_256_GCM_SHA384
        Exact(0xC030), // ECDHE_RSA_WITH_AES_256_GCM_SHA384
        Exact(0xCCA9), // ECDHE_ECDSA_WITH_CHACHA20_POLY1305
        Exact(0xCCA8), // ECDHE_RSA_WITH_CHACHA20_POLY1305
    ],
    extension_order: &[
        Placeholder,
        Exact(0xFF01), // renegotiation_info
        Exact(23),     // extended_master_secret
        Exact(35),     // session_ticket
        Exact(13),     // signature_algorithms
        Exact(5),      // status_request
        Exact(18),     // signed_certificate_timestamp
        Exact(16),     // ALPN
        Exact(11),     // ec_point_formats
        Exact(10),     // supported_groups
        Placeholder,
    ],
    curve_prefix: &[Placeholder, Exact(29), Exact(23), Exact(24)],
    compression_methods: &[0],
    forbidden_ciphers: &[0x003C, 0x003D, 0xC023, 0xC024, 0xC027, 0xC028],
    forbidden_curves: &[25],
    cipher_placeholders: Presence::Required,
    extension_placeholders: Presence::Required,
};

/// NSS as shipped in Firefox 51: no placeholders anywhere, ChaCha20 between
/// the AES-128 and AES-256 GCM suites, x25519 first with P-521 kept.
pub static FIREFOX: Signature = Signature {
    browser: Browser::Firefox,
    cipher_prefix: &[
        Exact(0xC02B),
        Exact(0xC02F),
        Exact(0xCCA9),
        Exact(0xCCA8),
        Exact(0xC02C),
        Exact(0xC030),
        Exact(0xC00A), // ECDHE_ECDSA_WITH_AES_256_CBC_SHA
        Exact(0xC009), // ECDHE_ECDSA_WITH_AES_128_CBC_SHA
        Exact(0xC013), // ECDHE_RSA_WITH_AES_128_CBC_SHA
        Exact(0xC014), // ECDHE_RSA_WITH_AES_256_CBC_SHA
    ],
    extension_order: &[
        Exact(23),
        Exact(0xFF01),
        Exact(10),
        Exact(11),
        Exact(35),
        Exact(16),
        Exact(5),
        Exact(13),
    ],
    curve_prefix: &[Exact(29), Exact(23), Exact(24), Exact(25)],
    compression_methods: &[0],
    forbidden_ciphers: &[],
    forbidden_curves: &[],
    cipher_placeholders: Presence::Forbidden,
    extension_placeholders: Presence::Forbidden,
};

/// SecureTransport as used by Safari 10: renegotiation SCSV first, ECDSA
/// suites grouped before RSA, NPN-era 13172 between signature_algorithms
/// and ALPN.
pub static SAFARI: Signature = Signature {
    browser: Browser::Safari,
    cipher_prefix: &[
        Placeholder,
        Exact(0xC02C),
        Exact(0xC02B),
        Exact(0xC024), // ECDHE_ECDSA_WITH_AES_256_CBC_SHA384
        Exact(0xC023), // ECDHE_ECDSA_WITH_AES_128_CBC_SHA256
        Exact(0xC00A),
        Exact(0xC009),
        Exact(0xC030),
        Exact(0xC02F),
        Exact(0xC028), // ECDHE_RSA_WITH_AES_256_CBC_SHA384
        Exact(0xC027), // ECDHE_RSA_WITH_AES_128_CBC_SHA256
        Exact(0xC014),
        Exact(0xC013),
    ],
    extension_order: &[
        Exact(10),
        Exact(11),
        Exact(13),
        Exact(13172), // next_protocol_negotiation
        Exact(16),
        Exact(5),
        Exact(18),
        Exact(23),
    ],
    curve_prefix: &[Exact(23), Exact(24), Exact(25)],
    compression_methods: &[0],
    forbidden_ciphers: &[],
    forbidden_curves: &[],
    cipher_placeholders: Presence::Allowed,
    extension_placeholders: Presence::Forbidden,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_names_round_trip() {
        for b in Browser::ALL {
            assert_eq!(b.to_string().parse::<Browser>().unwrap(), b);
        }
        assert_eq!(" Chrome ".parse::<Browser>().unwrap(), Browser::Chrome);
        assert!("opera".parse::<Browser>().is_err());
    }

    #[test]
    fn only_edge_lacks_a_signature() {
        for b in Browser::ALL {
            assert_eq!(b.signature().is_none(), b == Browser::Edge);
            if let Some(sig) = b.signature() {
                assert_eq!(sig.browser, b);
            }
        }
    }

    #[test]
    fn placeholder_slot_is_a_wildcard() {
        assert!(Placeholder.matches(0x0A0A));
        assert!(Placeholder.matches(0xBABA));
        assert!(Placeholder.matches(0x00FF));
        assert!(!Placeholder.matches(0xC02B));
        assert!(Exact(0xC02B).matches(0xC02B));
        assert!(!Exact(0xC02B).matches(0x0A0A));
    }

    #[test]
    fn prefix_is_contiguous() {
        let slots = [Placeholder, Exact(1), Exact(2)];
        assert!(starts_with(&[0x3A3A, 1, 2, 9], &slots));
        assert!(!starts_with(&[0x3A3A, 1, 9, 2], &slots));
        assert!(!starts_with(&[0x3A3A, 1], &slots));
        assert!(starts_with(&[], &[]));
    }

    #[test]
    fn order_is_a_subsequence() {
        let slots = [Exact(1), Exact(2), Placeholder];
        assert!(contains_in_order(&[1, 7, 2, 8, 0x5A5A], &slots));
        assert!(!contains_in_order(&[2, 1, 0x5A5A], &slots));
        assert!(!contains_in_order(&[1, 2], &slots));
        // one value cannot satisfy two slots
        assert!(!contains_in_order(&[1], &[Exact(1), Exact(1)]));
    }

    #[test]
    fn presence_policies() {
        assert!(Presence::Required.check(&[1, 0x0A0A]));
        assert!(!Presence::Required.check(&[1, 2]));
        assert!(Presence::Forbidden.check(&[1, 2]));
        assert!(!Presence::Forbidden.check(&[0x00FF]));
        assert!(Presence::Allowed.check(&[0x00FF]));
    }
}
