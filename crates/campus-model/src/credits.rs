//! Project credits.

use serde::Serialize;

/// A credited person with an optional public profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Person {
    pub name: &'static str,
    pub profile_url: Option<&'static str>,
}

/// Developers and data contributors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Credits {
    pub developers: &'static [Person],
    /// People who collected the auto-driver numbers at the main gate.
    pub contributors: &'static [&'static str],
}
