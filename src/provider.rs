//! Provider abstraction: the opaque "load and fetch attribute" seam.
//!
//! Providers are external collaborators. This layer never looks inside them;
//! it only asks a provider to load itself once and hand back the set of
//! attributes it exports. Everything a provider exposes travels as a
//! [`SymbolValue`], so one resolution cache can hold heterogeneous entities
//! (type handles, constants, function objects) side by side.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// A resolved symbol value. `Arc` keeps cached values identity-stable: every
/// resolution of the same name hands out a clone of the same allocation.
pub type SymbolValue = Arc<dyn Any + Send + Sync>;

/// A lazily loaded provider module.
///
/// `load` must be idempotent in effect: loading the same provider repeatedly
/// must produce an equivalent artifact. The registry additionally guarantees
/// it is invoked at most once per provider for a given [`Surface`], so
/// providers with observable load side effects are still safe.
///
/// A failed `load` is propagated unchanged to the resolving caller and may be
/// retried by a later resolution; providers should therefore fail without
/// leaving partial state behind.
///
/// [`Surface`]: crate::Surface
pub trait Provider: Send + Sync {
    /// Initialize the provider and return everything it exports.
    fn load(&self) -> anyhow::Result<ProviderExports>;
}

/// The attribute set a provider hands back from [`Provider::load`].
#[derive(Default)]
pub struct ProviderExports {
    attrs: HashMap<String, SymbolValue>,
}

impl ProviderExports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export `value` under `name`, consuming and returning the set so
    /// providers can chain exports.
    pub fn export<T: Any + Send + Sync>(mut self, name: impl Into<String>, value: T) -> Self {
        self.attrs.insert(name.into(), Arc::new(value));
        self
    }

    /// Export an already-shared value without re-wrapping it.
    pub fn export_shared(mut self, name: impl Into<String>, value: SymbolValue) -> Self {
        self.attrs.insert(name.into(), value);
        self
    }

    /// Fetch an exported attribute by name.
    pub fn get(&self, name: &str) -> Option<&SymbolValue> {
        self.attrs.get(name)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Names of all exported attributes, in no particular order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attrs.keys().map(String::as_str)
    }
}

struct FnProvider<F>(F);

impl<F> Provider for FnProvider<F>
where
    F: Fn() -> anyhow::Result<ProviderExports> + Send + Sync,
{
    fn load(&self) -> anyhow::Result<ProviderExports> {
        (self.0)()
    }
}

/// Wrap a closure as a [`Provider`]. Convenient for providers whose loading
/// is a single initialization expression, and for test doubles.
pub fn from_fn<F>(f: F) -> Arc<dyn Provider>
where
    F: Fn() -> anyhow::Result<ProviderExports> + Send + Sync + 'static,
{
    Arc::new(FnProvider(f))
}
