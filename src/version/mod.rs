//! Version ordering and resolution
//!
//! Resolves a requested (or "latest") version string against the versions
//! known to storage, using a semantic-version-like ordering.

mod ordering;
mod resolver;

pub use ordering::{compare_versions, is_stable_version, ParsedVersion, Qualifier};
pub use resolver::VersionResolver;
