//! # Daily Muse Release Catalog (daymuse-catalog)
//!
//! Release resolution pipeline: turns the compact release manifest and the
//! sparse editorial override map into the ordered list of playable releases.
//!
//! **Pipeline:**
//! - `calendar`: month + index → absolute day → ISO date
//! - `paths`: audio/cover storage paths and absolute URLs
//! - `overrides`: editorial override merge and markup stripping
//! - `resolver`: per-item resolution and day ordering
//!
//! Supporting modules load and validate inputs (`manifest`, `validation`),
//! keep the resolved list in memory (`catalog`), and derive token metadata
//! records (`metadata`).

pub mod calendar;
pub mod catalog;
pub mod manifest;
pub mod metadata;
pub mod overrides;
pub mod paths;
pub mod resolver;
pub mod validation;

pub use catalog::ReleaseCatalog;
pub use manifest::{ManifestItem, OverrideEntry, OverrideMap};
pub use resolver::{resolve, ResolveOptions};
