//! Error types for surface construction and symbol resolution.

use thiserror::Error;

/// Errors surfaced by [`Surface::resolve`](crate::Surface::resolve) and the
/// typed accessor. Every variant names the offending symbol and, where one is
/// involved, the owning provider, so failures are traceable without a debugger.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested name is not part of the public surface. Recoverable by
    /// the caller; never retried internally.
    #[error("surface '{surface}' has no symbol named '{symbol}'{}", .hint.as_ref().map(|h| format!("\n Hint: {}", h)).unwrap_or_default())]
    UnknownSymbol {
        surface: String,
        symbol: String,
        hint: Option<String>,
    },

    /// The provider behind the symbol failed to initialize. Propagated
    /// unchanged; the resolution cache stays untouched for this name, so a
    /// later call can succeed once the environment is corrected.
    #[error("provider '{provider}' failed to load while resolving '{symbol}': {source:#}")]
    OriginLoad {
        symbol: String,
        provider: String,
        source: anyhow::Error,
    },

    /// The provider loaded but does not export the expected attribute. The
    /// registry table and the provider are out of sync - an internal defect,
    /// not a normal runtime condition.
    #[error("provider '{provider}' loaded but has no attribute '{attribute}' (while resolving '{symbol}'); registry table and provider are out of sync")]
    MissingAttribute {
        symbol: String,
        provider: String,
        attribute: String,
    },

    /// A typed resolution asked for a different type than the provider
    /// exported. Only produced by [`Surface::resolve_as`](crate::Surface::resolve_as).
    #[error("symbol '{symbol}' from provider '{provider}' is not a '{expected}'")]
    WrongType {
        symbol: String,
        provider: String,
        expected: &'static str,
    },
}

impl Error {
    /// Attach an actionable hint to the error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        if let Error::UnknownSymbol { hint: ref mut h, .. } = self {
            *h = Some(hint.into());
        }
        self
    }

    /// True for the variants that signal registry/provider drift rather than
    /// a caller mistake or a transient environment problem.
    pub fn is_defect(&self) -> bool {
        matches!(self, Error::MissingAttribute { .. })
    }
}

/// Construction-time defects reported by
/// [`SurfaceBuilder::build`](crate::SurfaceBuilder::build). These never occur
/// at resolution time; a surface that built successfully has a well-formed
/// table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("symbol '{symbol}' registered twice (first from '{first}', then from '{second}')")]
    DuplicateSymbol {
        symbol: String,
        first: String,
        second: String,
    },

    #[error("provider '{provider}' attached twice")]
    DuplicateProvider { provider: String },

    #[error("symbol '{symbol}' references provider '{provider}', which was never attached")]
    UnknownProvider { symbol: String, provider: String },
}
