//! Static declaration mirror: the analysis-tooling view of a surface.
//!
//! External tooling (doc generators, API-diff checks, IDE indexers) needs to
//! know the shape of the public surface without loading any provider. The
//! mirror is a plain static list of [`SymbolDecl`]s, maintained by hand next
//! to the runtime registrations and never consulted on the resolve path.
//! Because the two artifacts are maintained independently, [`verify`] exists
//! to let a test pin them together; drift between them is a defect to catch
//! in CI, not a runtime condition to handle.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::locator::OriginLocator;
use crate::registry::Surface;

/// A statically declared public symbol: name plus origin, all `'static` so
/// declaration lists can live in a `static` slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymbolDecl {
    pub symbol: &'static str,
    pub provider: &'static str,
    pub attribute: &'static str,
}

impl SymbolDecl {
    pub const fn new(symbol: &'static str, provider: &'static str, attribute: &'static str) -> Self {
        Self {
            symbol,
            provider,
            attribute,
        }
    }

    fn locator(&self) -> OriginLocator {
        OriginLocator::new(self.provider, self.attribute)
    }
}

/// Every way a declaration mirror can drift from the runtime registry table.
/// All gaps are collected before reporting, so one test failure shows the
/// whole picture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorDrift {
    /// Symbols in the mirror that the registry table does not know.
    pub only_declared: Vec<String>,
    /// Symbols in the registry table that the mirror does not declare.
    pub only_registered: Vec<String>,
    /// Symbols present in both but pointing at different origins.
    pub relocated: Vec<String>,
}

impl MirrorDrift {
    fn is_empty(&self) -> bool {
        self.only_declared.is_empty() && self.only_registered.is_empty() && self.relocated.is_empty()
    }
}

impl fmt::Display for MirrorDrift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if !self.only_declared.is_empty() {
            parts.push(format!("only declared: {}", self.only_declared.join(", ")));
        }
        if !self.only_registered.is_empty() {
            parts.push(format!("only registered: {}", self.only_registered.join(", ")));
        }
        if !self.relocated.is_empty() {
            parts.push(format!("relocated: {}", self.relocated.join(", ")));
        }
        write!(
            f,
            "declaration mirror drifted from registry table: {}",
            parts.join("; ")
        )
    }
}

impl std::error::Error for MirrorDrift {}

/// Check that `decls` and the surface's registry table describe the same set
/// of symbols with the same origins. Intended for tests; never loads a
/// provider.
pub fn verify(decls: &[SymbolDecl], surface: &Surface) -> Result<(), MirrorDrift> {
    let declared: BTreeMap<&str, OriginLocator> =
        decls.iter().map(|d| (d.symbol, d.locator())).collect();

    let mut drift = MirrorDrift::default();

    for (name, locator) in &declared {
        match surface.locator(name) {
            None => drift.only_declared.push(name.to_string()),
            Some(registered) if registered != locator => drift.relocated.push(name.to_string()),
            Some(_) => {}
        }
    }
    for (name, _) in surface.iter() {
        if !declared.contains_key(name) {
            drift.only_registered.push(name.to_string());
        }
    }

    if drift.is_empty() {
        Ok(())
    } else {
        Err(drift)
    }
}

/// Render a declaration list as JSON for external analysis tooling, keyed by
/// symbol name in stable order.
pub fn to_json(decls: &[SymbolDecl]) -> serde_json::Value {
    let map: BTreeMap<&str, &SymbolDecl> = decls.iter().map(|d| (d.symbol, d)).collect();
    serde_json::json!({
        "symbols": map,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{from_fn, ProviderExports};
    use crate::SurfaceBuilder;

    fn surface() -> Surface {
        SurfaceBuilder::new("kron.core")
            .provider("core.graph", from_fn(|| Ok(ProviderExports::new())))
            .provider("core.flow", from_fn(|| Ok(ProviderExports::new())))
            .reexport("core.graph", "Graph")
            .reexport("core.flow", "Flow")
            .build()
            .unwrap()
    }

    #[test]
    fn test_matching_mirror_verifies() {
        static DECLS: &[SymbolDecl] = &[
            SymbolDecl::new("Flow", "core.flow", "Flow"),
            SymbolDecl::new("Graph", "core.graph", "Graph"),
        ];
        assert!(verify(DECLS, &surface()).is_ok());
    }

    #[test]
    fn test_drift_reports_every_gap() {
        static DECLS: &[SymbolDecl] = &[
            SymbolDecl::new("Graph", "core.graph", "Graph"),
            SymbolDecl::new("Pile", "core.pile", "Pile"),
        ];
        let drift = verify(DECLS, &surface()).unwrap_err();
        assert_eq!(drift.only_declared, vec!["Pile"]);
        assert_eq!(drift.only_registered, vec!["Flow"]);
        assert!(drift.relocated.is_empty());
        let msg = drift.to_string();
        assert!(msg.contains("Pile") && msg.contains("Flow"), "{msg}");
    }

    #[test]
    fn test_relocated_symbol_is_drift() {
        static DECLS: &[SymbolDecl] = &[
            SymbolDecl::new("Flow", "core.flow", "Flow"),
            SymbolDecl::new("Graph", "core.flow", "Graph"),
        ];
        let drift = verify(DECLS, &surface()).unwrap_err();
        assert_eq!(drift.relocated, vec!["Graph"]);
    }

    #[test]
    fn test_json_export_lists_symbols_by_name() {
        static DECLS: &[SymbolDecl] = &[SymbolDecl::new("Graph", "core.graph", "Graph")];
        let json = to_json(DECLS);
        assert_eq!(json["symbols"]["Graph"]["provider"], "core.graph");
    }
}
