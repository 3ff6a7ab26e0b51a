use serde::Serialize;

use crate::fingerprint::signature::{Browser, CHROME, FIREFOX, SAFARI};
use crate::hello::ParsedHello;

pub fn looks_like_chrome(hello: &ParsedHello) -> bool {
    CHROME.matches(hello)
}

/// Firefox never sends placeholders; its signature forbids them, which
/// also keeps it clear of the Chrome pattern.
pub fn looks_like_firefox(hello: &ParsedHello) -> bool {
    FIREFOX.matches(hello)
}

/// Safari shares much of its cipher list with other stacks on some
/// platforms, so it only claims hellos that neither Chrome nor Firefox
/// matched. The tie-break is a heuristic, not a partition.
pub fn looks_like_safari(hello: &ParsedHello) -> bool {
    SAFARI.matches(hello) && !CHROME.matches(hello) && !FIREFOX.matches(hello)
}

/// Always false. There is no verified Edge sample to build a signature
/// from, and a guess would misreport real Edge users as intercepted.
pub fn looks_like_edge(_hello: &ParsedHello) -> bool {
    false
}

impl ParsedHello {
    pub fn looks_like(&self, browser: Browser) -> bool {
        match browser {
            Browser::Chrome => looks_like_chrome(self),
            Browser::Firefox => looks_like_firefox(self),
            Browser::Safari => looks_like_safari(self),
            Browser::Edge => looks_like_edge(self),
        }
    }
}

/// Outcome of every family predicate for one hello.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub chrome: bool,
    pub firefox: bool,
    pub safari: bool,
    pub edge: bool,
}

impl Classification {
    pub fn get(&self, browser: Browser) -> bool {
        match browser {
            Browser::Chrome => self.chrome,
            Browser::Firefox => self.firefox,
            Browser::Safari => self.safari,
            Browser::Edge => self.edge,
        }
    }

    /// Families whose predicate held, in `Browser::ALL` order.
    pub fn matches(&self) -> Vec<Browser> {
        Browser::ALL.into_iter().filter(|b| self.get(*b)).collect()
    }

    /// No family matched: a non-browser client or one we have no
    /// signature for.
    pub fn is_unrecognized(&self) -> bool {
        self.matches().is_empty()
    }
}

pub fn classify(hello: &ParsedHello) -> Classification {
    Classification {
        chrome: looks_like_chrome(hello),
        firefox: looks_like_firefox(hello),
        safari: looks_like_safari(hello),
        edge: looks_like_edge(hello),
    }
}
