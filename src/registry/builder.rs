//! Construction-time registration for a [`Surface`].

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use super::surface::Surface;
use crate::error::BuildError;
use crate::locator::OriginLocator;
use crate::provider::Provider;

/// Builds a [`Surface`] by attaching providers and registering the symbols
/// they back.
///
/// Registration order does not matter: a symbol may be registered before its
/// provider is attached. All defects (duplicate symbols, duplicate providers,
/// symbols pointing at providers that were never attached) are reported by
/// [`build`](Self::build); a surface that built successfully has a
/// well-formed, fully resolvable-in-principle table.
pub struct SurfaceBuilder {
    name: String,
    providers: Vec<(String, Arc<dyn Provider>)>,
    symbols: Vec<(String, OriginLocator)>,
}

impl SurfaceBuilder {
    /// Start a builder for a surface with the given package-style name
    /// (used in error messages and logs, e.g. `"kron.core"`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            providers: Vec::new(),
            symbols: Vec::new(),
        }
    }

    /// Attach a provider under `id`. The provider is not loaded here; it is
    /// only loaded when one of its symbols is first resolved.
    pub fn provider(mut self, id: impl Into<String>, provider: Arc<dyn Provider>) -> Self {
        self.providers.push((id.into(), provider));
        self
    }

    /// Register the public symbol `name`, backed by `attribute` of the
    /// provider attached under `provider_id`.
    pub fn symbol(
        mut self,
        name: impl Into<String>,
        provider_id: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        self.symbols
            .push((name.into(), OriginLocator::new(provider_id, attribute)));
        self
    }

    /// Register a symbol whose public name equals the provider attribute
    /// name - the common case.
    pub fn reexport(self, provider_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        let provider_id = provider_id.into();
        let attribute = attribute.into();
        self.symbol(attribute.clone(), provider_id, attribute)
    }

    /// Validate the registrations and freeze them into a [`Surface`].
    pub fn build(self) -> Result<Surface, BuildError> {
        let mut providers: HashMap<String, Arc<dyn Provider>> = HashMap::new();
        for (id, provider) in self.providers {
            if providers.insert(id.clone(), provider).is_some() {
                return Err(BuildError::DuplicateProvider { provider: id });
            }
        }

        let mut table: BTreeMap<String, OriginLocator> = BTreeMap::new();
        for (name, locator) in self.symbols {
            if !providers.contains_key(&locator.provider) {
                return Err(BuildError::UnknownProvider {
                    symbol: name,
                    provider: locator.provider,
                });
            }
            if let Some(first) = table.get(&name) {
                return Err(BuildError::DuplicateSymbol {
                    symbol: name,
                    first: first.to_string(),
                    second: locator.to_string(),
                });
            }
            table.insert(name, locator);
        }

        Ok(Surface::from_parts(self.name, table, providers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{from_fn, ProviderExports};

    fn empty_provider() -> Arc<dyn Provider> {
        from_fn(|| Ok(ProviderExports::new()))
    }

    #[test]
    fn test_duplicate_symbol_is_a_build_defect() {
        let err = SurfaceBuilder::new("kron.core")
            .provider("core.graph", empty_provider())
            .provider("core.flow", empty_provider())
            .reexport("core.graph", "Graph")
            .symbol("Graph", "core.flow", "Graph")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateSymbol {
                symbol: "Graph".into(),
                first: "core.graph::Graph".into(),
                second: "core.flow::Graph".into(),
            }
        );
    }

    #[test]
    fn test_duplicate_provider_is_a_build_defect() {
        let err = SurfaceBuilder::new("kron.core")
            .provider("core.graph", empty_provider())
            .provider("core.graph", empty_provider())
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::DuplicateProvider { provider } if provider == "core.graph"));
    }

    #[test]
    fn test_symbol_without_provider_is_a_build_defect() {
        let err = SurfaceBuilder::new("kron.core")
            .reexport("core.graph", "Graph")
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::UnknownProvider { symbol, provider }
            if symbol == "Graph" && provider == "core.graph"));
    }

    #[test]
    fn test_registration_order_does_not_matter() {
        let surface = SurfaceBuilder::new("kron.core")
            .reexport("core.graph", "Graph")
            .provider("core.graph", empty_provider())
            .build()
            .unwrap();
        assert_eq!(surface.list_names(), vec!["Graph"]);
    }
}
