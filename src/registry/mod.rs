//! Registry table, resolution cache and the on-demand resolver.
//!
//! This is the runtime half of the surface: a read-only table mapping public
//! symbol names to [`OriginLocator`]s, a never-evicting cache of resolved
//! values, and the resolver that loads providers on first use.
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`SurfaceBuilder`] | Construction-time registration of providers and symbols |
//! | [`Surface`] | Frozen table + cache; owns `resolve` and `list_names` |
//! | [`SurfaceStats`] | Counters for cache hits/misses and provider loads |
//!
//! ## Example
//!
//! ```rust
//! use lazy_surface::provider::from_fn;
//! use lazy_surface::{ProviderExports, SurfaceBuilder};
//!
//! let surface = SurfaceBuilder::new("kron.core")
//!     .provider("core.graph", from_fn(|| {
//!         Ok(ProviderExports::new().export("Graph", "graph-module"))
//!     }))
//!     .symbol("Graph", "core.graph", "Graph")
//!     .build()
//!     .unwrap();
//!
//! let value = surface.resolve("Graph").unwrap();
//! assert!(value.downcast_ref::<&str>().is_some());
//! ```
//!
//! [`OriginLocator`]: crate::OriginLocator

mod builder;
mod surface;

pub use builder::SurfaceBuilder;
pub use surface::{Surface, SurfaceStats};
