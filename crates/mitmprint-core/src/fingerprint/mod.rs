pub mod classify;
pub mod ja3;
pub mod placeholder;
pub mod signature;

pub use classify::{
    classify, looks_like_chrome, looks_like_edge, looks_like_firefox, looks_like_safari,
    Classification,
};
pub use signature::{Browser, UnknownBrowser};
