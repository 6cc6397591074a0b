//! In-memory release catalog
//!
//! Holds the resolved release list for readers. The list is never patched in
//! place: a reload resolves a complete new list and swaps it in, and a failed
//! reload leaves the previous list untouched.

use crate::manifest::{load_manifest, load_overrides, ManifestItem, OverrideMap};
use crate::resolver::{resolve, ResolveOptions};
use crate::validation::ensure_valid;
use daymuse_common::config::CatalogConfig;
use daymuse_common::{Release, Result};
use std::sync::Arc;
use tracing::info;

/// Resolved, day-ordered releases plus the settings they were built from
#[derive(Debug, Clone)]
pub struct ReleaseCatalog {
    config: CatalogConfig,
    releases: Arc<Vec<Release>>,
}

impl ReleaseCatalog {
    /// Load the manifest and overrides named in `config` and resolve them
    pub fn load(config: &CatalogConfig) -> Result<Self> {
        let releases = build_releases(config)?;
        info!(
            "Catalog loaded: {} releases from {}",
            releases.len(),
            config.manifest_path.display()
        );
        Ok(Self {
            config: config.clone(),
            releases: Arc::new(releases),
        })
    }

    /// Build a catalog from already-parsed inputs
    pub fn from_parts(
        config: &CatalogConfig,
        items: &[ManifestItem],
        overrides: &OverrideMap,
    ) -> Result<Self> {
        if config.strict_manifest {
            ensure_valid(items)?;
        }
        let releases = resolve(items, overrides, &ResolveOptions::from(config))?;
        Ok(Self {
            config: config.clone(),
            releases: Arc::new(releases),
        })
    }

    /// Re-read inputs and replace the list wholesale
    pub fn reload(&mut self) -> Result<()> {
        let releases = build_releases(&self.config)?;
        info!(
            "Catalog reloaded: {} releases (previously {})",
            releases.len(),
            self.releases.len()
        );
        self.releases = Arc::new(releases);
        Ok(())
    }

    /// All releases, ascending by day
    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    /// Shared handle to the current list; unaffected by later reloads
    pub fn snapshot(&self) -> Arc<Vec<Release>> {
        Arc::clone(&self.releases)
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// First release on the given absolute day
    pub fn find_by_day(&self, day: u32) -> Option<&Release> {
        self.releases.iter().find(|release| release.day == day)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Release> {
        self.releases.iter().find(|release| release.id == id)
    }

    /// Release with the highest day
    pub fn latest(&self) -> Option<&Release> {
        self.releases.last()
    }
}

fn build_releases(config: &CatalogConfig) -> Result<Vec<Release>> {
    let items = load_manifest(&config.manifest_path)?;
    let overrides = load_overrides(&config.overrides_path);

    if config.strict_manifest {
        ensure_valid(&items)?;
    }

    resolve(&items, &overrides, &ResolveOptions::from(config))
}
