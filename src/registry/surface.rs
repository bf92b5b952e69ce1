//! The frozen surface: registry table, resolution cache and resolver.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::error::Error;
use crate::locator::OriginLocator;
use crate::provider::{Provider, ProviderExports, SymbolValue};
use crate::Result;

/// One registry table row: where the symbol comes from, plus its resolution
/// cache cell. The cell starts empty, is set at most once, and is never
/// evicted; a failed resolution leaves it empty so a later attempt can
/// succeed.
struct Entry {
    locator: OriginLocator,
    value: OnceCell<SymbolValue>,
}

/// A provider attached to the surface, with its load-at-most-once slot.
/// Loading is shared across every symbol the provider backs.
struct ProviderSlot {
    provider: Arc<dyn Provider>,
    exports: OnceCell<Arc<ProviderExports>>,
}

/// Snapshot of resolver activity. Observability only; nothing in the resolve
/// path reads these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceStats {
    /// Resolutions served from the cache.
    pub hits: u64,
    /// Resolutions that had to consult the registry table.
    pub misses: u64,
    /// Provider load attempts (successful or not).
    pub provider_loads: u64,
    /// Provider load attempts that failed.
    pub load_failures: u64,
}

#[derive(Default)]
struct AtomicStats {
    hits: AtomicU64,
    misses: AtomicU64,
    provider_loads: AtomicU64,
    load_failures: AtomicU64,
}

impl AtomicStats {
    fn snapshot(&self) -> SurfaceStats {
        SurfaceStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            provider_loads: self.provider_loads.load(Ordering::Relaxed),
            load_failures: self.load_failures.load(Ordering::Relaxed),
        }
    }
}

/// The public surface of a package: a read-only symbol table plus a lazy,
/// never-evicting resolution cache.
///
/// A `Surface` is built once by [`SurfaceBuilder`] and owned by the
/// package's composition root for the life of the process. It is `Send +
/// Sync`; `resolve` may be called from any number of threads. Tests that
/// need a clean cache simply build a fresh instance - there is no global
/// singleton and no teardown.
///
/// [`SurfaceBuilder`]: crate::SurfaceBuilder
pub struct Surface {
    name: String,
    table: BTreeMap<String, Entry>,
    providers: HashMap<String, ProviderSlot>,
    stats: AtomicStats,
}

impl Surface {
    pub(super) fn from_parts(
        name: String,
        table: BTreeMap<String, OriginLocator>,
        providers: HashMap<String, Arc<dyn Provider>>,
    ) -> Self {
        let table = table
            .into_iter()
            .map(|(name, locator)| {
                (
                    name,
                    Entry {
                        locator,
                        value: OnceCell::new(),
                    },
                )
            })
            .collect();
        let providers = providers
            .into_iter()
            .map(|(id, provider)| {
                (
                    id,
                    ProviderSlot {
                        provider,
                        exports: OnceCell::new(),
                    },
                )
            })
            .collect();
        Self {
            name,
            table,
            providers,
            stats: AtomicStats::default(),
        }
    }

    /// The surface's package-style name, e.g. `"kron.core"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve a public symbol, loading its provider on first use.
    ///
    /// Cached values are identity-stable: every call for the same name
    /// returns a clone of the same `Arc`. Concurrent first resolutions of
    /// one name perform exactly one provider load; resolutions of unrelated
    /// names never block each other.
    pub fn resolve(&self, name: &str) -> Result<SymbolValue> {
        let entry = self.table.get(name).ok_or_else(|| self.unknown(name))?;

        if let Some(value) = entry.value.get() {
            self.stats.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(surface = %self.name, symbol = name, "resolution cache hit");
            return Ok(Arc::clone(value));
        }

        let value = entry
            .value
            .get_or_try_init(|| self.fetch_from_origin(name, &entry.locator))?;
        Ok(Arc::clone(value))
    }

    /// Resolve a symbol and downcast it to a concrete type.
    pub fn resolve_as<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>> {
        let value = self.resolve(name)?;
        value.downcast::<T>().map_err(|_| Error::WrongType {
            symbol: name.to_string(),
            // resolve() succeeded, so the entry exists
            provider: self.table[name].locator.provider.clone(),
            expected: std::any::type_name::<T>(),
        })
    }

    /// Slow path: load the provider (at most once per surface) and fetch the
    /// attribute the locator names. Runs under the symbol's cell; on error
    /// both the symbol cell and, for load failures, the provider slot stay
    /// empty.
    fn fetch_from_origin(&self, name: &str, locator: &OriginLocator) -> Result<SymbolValue> {
        self.stats.misses.fetch_add(1, Ordering::Relaxed);

        let slot = self
            .providers
            .get(&locator.provider)
            .expect("builder validated every locator against an attached provider");

        let exports = slot.exports.get_or_try_init(|| {
            self.stats.provider_loads.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(surface = %self.name, provider = %locator.provider, "loading provider");
            slot.provider.load().map(Arc::new).map_err(|source| {
                self.stats.load_failures.fetch_add(1, Ordering::Relaxed);
                Error::OriginLoad {
                    symbol: name.to_string(),
                    provider: locator.provider.clone(),
                    source,
                }
            })
        })?;

        match exports.get(&locator.attribute) {
            Some(value) => Ok(Arc::clone(value)),
            None => {
                tracing::warn!(
                    surface = %self.name,
                    symbol = name,
                    locator = %locator,
                    "registry table and provider are out of sync"
                );
                Err(Error::MissingAttribute {
                    symbol: name.to_string(),
                    provider: locator.provider.clone(),
                    attribute: locator.attribute.clone(),
                })
            }
        }
    }

    /// Every public symbol name, in stable lexicographic order. Never loads
    /// a provider and never consults the cache.
    pub fn list_names(&self) -> Vec<&str> {
        self.table.keys().map(String::as_str).collect()
    }

    /// Iterate the registry table as `(name, locator)` pairs, in the same
    /// order as [`list_names`](Self::list_names).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OriginLocator)> {
        self.table
            .iter()
            .map(|(name, entry)| (name.as_str(), &entry.locator))
    }

    /// Read-only registry table lookup.
    pub fn locator(&self, name: &str) -> Option<&OriginLocator> {
        self.table.get(name).map(|entry| &entry.locator)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of symbols currently sitting in the resolution cache.
    pub fn resolved_len(&self) -> usize {
        self.table
            .values()
            .filter(|entry| entry.value.get().is_some())
            .count()
    }

    pub fn stats(&self) -> SurfaceStats {
        self.stats.snapshot()
    }

    fn unknown(&self, name: &str) -> Error {
        Error::UnknownSymbol {
            surface: self.name.clone(),
            symbol: name.to_string(),
            hint: None,
        }
        .with_hint("the full surface can be enumerated with list_names()")
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("name", &self.name)
            .field("symbols", &self.table.len())
            .field("providers", &self.providers.len())
            .field("resolved", &self.resolved_len())
            .finish()
    }
}
