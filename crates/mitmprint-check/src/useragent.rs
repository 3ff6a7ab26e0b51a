use serde::Serialize;

use mitmprint_core::{Browser, Classification, ParsedHello};

/// Map a User-Agent header to the browser family it claims to be.
///
/// Edge and Chrome also carry `Safari/`, and Edge carries `Chrome/`, so the
/// checks run from most to least specific. Every iOS browser runs on
/// WebKit's TLS stack, so their iOS tokens claim Safari.
pub fn claimed_browser(user_agent: &str) -> Option<Browser> {
    let has = |tokens: &[&str]| tokens.iter().any(|t| user_agent.contains(t));

    if has(&["CriOS/", "FxiOS/", "EdgiOS/"]) {
        Some(Browser::Safari)
    } else if has(&["Edge/", "Edg/"]) {
        Some(Browser::Edge)
    } else if has(&["Chrome/"]) {
        Some(Browser::Chrome)
    } else if has(&["Firefox/"]) {
        Some(Browser::Firefox)
    } else if has(&["Safari/"]) {
        Some(Browser::Safari)
    } else {
        None
    }
}

/// Claimed identity vs. what the handshake looks like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub claimed: Option<Browser>,
    pub observed: Vec<Browser>,
    /// `Some(true)` when the hello does not match the claimed family.
    /// `None` when nothing was claimed or the family has no signature.
    pub mitm: Option<bool>,
}

impl Verdict {
    pub fn new(claimed: Option<Browser>, hello: &ParsedHello, classification: &Classification) -> Self {
        let mitm = claimed
            .filter(|b| b.signature().is_some())
            .map(|b| !hello.looks_like(b));
        Self {
            claimed,
            observed: classification.matches(),
            mitm,
        }
    }

    pub fn summary(&self) -> &'static str {
        match self.mitm {
            Some(true) => "likely intercepted",
            Some(false) => "consistent",
            None => "unchecked",
        }
    }
}
