//! # lazy-surface
//!
//! Lazy symbol-resolution layer: expose a package's full public surface of
//! named entities (types, constants, functions) while deferring provider
//! initialization until a symbol is first requested.
//!
//! ## Overview
//!
//! Packages that aggregate many internal providers pay for all of them at
//! startup even when a caller only touches one. This library keeps the
//! surface complete and enumerable - callers and tooling see every name -
//! but each provider is loaded at most once, on first use, and every
//! resolved value is cached for the life of the process.
//!
//! ## Core Philosophy
//!
//! - **Lazy**: providers load on first resolution, never at construction
//! - **Stable**: a resolved symbol is cached forever and identity-stable
//! - **Enumerable**: the surface is fully listable without loading anything
//! - **Checkable**: a static declaration mirror gives analysis tooling the
//!   same view, pinned to the runtime table by a consistency test
//!
//! ## Quick Start
//!
//! ```rust
//! use lazy_surface::provider::from_fn;
//! use lazy_surface::{ProviderExports, SurfaceBuilder};
//!
//! fn main() -> lazy_surface::Result<()> {
//!     let surface = SurfaceBuilder::new("kron.core")
//!         .provider("core.graph", from_fn(|| {
//!             // Expensive initialization happens here, once, on demand.
//!             Ok(ProviderExports::new().export("Graph", "graph-module"))
//!         }))
//!         .symbol("Graph", "core.graph", "Graph")
//!         .build()
//!         .expect("well-formed surface");
//!
//!     let graph = surface.resolve_as::<&str>("Graph")?;
//!     assert_eq!(*graph, "graph-module");
//!     assert_eq!(surface.list_names(), vec!["Graph"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`registry`] | Registry table, resolution cache and resolver |
//! | [`provider`] | Provider trait and exported-attribute sets |
//! | [`locator`] | Typed symbol-origin locators |
//! | [`mirror`] | Static declaration mirror and consistency check |
//! | [`decl`] | The shipped core surface declarations |
//! | [`error`] | Resolution and construction error taxonomy |

pub mod decl;
pub mod locator;
pub mod mirror;
pub mod provider;
pub mod registry;

// Re-export main types for convenience
pub use locator::OriginLocator;
pub use mirror::SymbolDecl;
pub use provider::{Provider, ProviderExports, SymbolValue};
pub use registry::{Surface, SurfaceBuilder, SurfaceStats};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for surface construction and resolution
pub mod error;
pub use error::{BuildError, Error};
