//! Origin locators: where a public symbol's value actually lives.

use serde::Serialize;
use std::fmt;

/// Identifies the origin of a public symbol: which provider supplies it and
/// under which attribute name the provider exports it.
///
/// Locators are created when the registry table is built and never modified
/// afterwards. The attribute name may differ from the public symbol name,
/// which lets a surface re-export a provider attribute under a friendlier
/// alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OriginLocator {
    /// Identifier of the provider module, e.g. `"core.graph"`.
    pub provider: String,
    /// Attribute name within that provider, e.g. `"Graph"`.
    pub attribute: String,
}

impl OriginLocator {
    pub fn new(provider: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            attribute: attribute.into(),
        }
    }
}

impl fmt::Display for OriginLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.provider, self.attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_provider_and_attribute() {
        let loc = OriginLocator::new("core.graph", "Graph");
        assert_eq!(loc.to_string(), "core.graph::Graph");
    }
}
