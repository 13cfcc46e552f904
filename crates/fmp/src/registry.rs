//! Name-indexed view of the endpoint catalog.

use std::collections::HashMap;
use std::sync::LazyLock;

use fmp_core::{Endpoint, FmpError, Result};
use tracing::debug;

use crate::catalog::CATALOG;

static GLOBAL: LazyLock<Registry> = LazyLock::new(|| Registry::from_catalog(CATALOG));

/// Lookup table from endpoint name to its descriptor.
///
/// The registry is built once from `'static` descriptors and never changes,
/// so it can be shared freely between tasks.
///
/// # Example
///
/// ```rust,ignore
/// use fmp::Registry;
///
/// let quote = Registry::global().get("quote")?;
/// assert_eq!(quote.path, "quote");
/// ```
#[derive(Clone)]
pub struct Registry {
    by_name: HashMap<&'static str, &'static Endpoint>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.by_name.keys().collect();
        names.sort_unstable();
        f.debug_struct("Registry").field("endpoints", &names).finish()
    }
}

impl Registry {
    /// The registry over the built-in catalog.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Index a set of descriptors. A later descriptor with the same name
    /// replaces an earlier one.
    #[must_use]
    pub fn from_catalog(endpoints: &'static [Endpoint]) -> Self {
        let by_name: HashMap<_, _> = endpoints.iter().map(|e| (e.name, e)).collect();
        debug!(endpoints = by_name.len(), "Endpoint registry built");
        Self { by_name }
    }

    /// Look up an endpoint by name.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::UnknownEndpoint`] if no endpoint has that name.
    pub fn get(&self, name: &str) -> Result<&'static Endpoint> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| FmpError::UnknownEndpoint(name.to_string()))
    }

    /// Returns true if an endpoint with that name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All endpoints, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Endpoint> + '_ {
        self.by_name.values().copied()
    }

    /// Number of endpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if the registry has no endpoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmp_core::ApiVersion;

    #[test]
    fn test_global_indexes_whole_catalog() {
        let registry = Registry::global();
        assert_eq!(registry.len(), CATALOG.len());
        assert!(!registry.is_empty());
        assert!(registry.iter().all(|e| registry.contains(e.name)));
    }

    #[test]
    fn test_lookup() {
        let registry = Registry::global();
        let endpoint = registry.get("v3/historical-price-full").unwrap();
        assert_eq!(endpoint.version, ApiVersion::V3);
        assert_eq!(registry.get("profile").unwrap().path, "profile");
    }

    #[test]
    fn test_unknown_endpoint() {
        let err = Registry::global().get("no-such-endpoint").unwrap_err();
        assert!(matches!(err, FmpError::UnknownEndpoint(ref name) if name == "no-such-endpoint"));
    }

    #[test]
    fn test_custom_catalog() {
        static CUSTOM: &[Endpoint] = &[Endpoint::new("only", "only", &[])];
        let registry = Registry::from_catalog(CUSTOM);
        assert_eq!(registry.len(), 1);
        assert!(registry.get("quote").is_err());
        assert!(format!("{registry:?}").contains("only"));
    }
}
