//! Helper functions shared by the static page flow

mod url;

pub use url::*;
