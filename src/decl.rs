//! The core surface this package ships: 30 symbols across 11 providers.
//!
//! Two artifacts live here and are maintained independently, on purpose:
//!
//! - [`CORE_SURFACE`], the static declaration mirror consumed by analysis
//!   tooling (see [`mirror`](crate::mirror)); and
//! - [`core_surface`], the runtime registrations fed to the resolver.
//!
//! Changing either list changes the package's compatibility contract. A test
//! pins the two together via [`mirror::verify`](crate::mirror::verify), so
//! editing one without the other fails CI rather than surfacing as a runtime
//! inconsistency.

use crate::mirror::SymbolDecl;
use crate::registry::SurfaceBuilder;

/// Provider identifiers of the core surface. Callers attach an implementation
/// for each of these before building.
pub const CORE_PROVIDERS: &[&str] = &[
    "core.broadcaster",
    "core.element",
    "core.event",
    "core.eventbus",
    "core.flow",
    "core.graph",
    "core.node",
    "core.phrase",
    "core.pile",
    "core.processor",
    "core.progression",
];

/// Static declaration mirror of the core surface. Never consulted at
/// resolution time; exists so tooling can see the full surface without
/// loading a single provider.
pub static CORE_SURFACE: &[SymbolDecl] = &[
    // broadcaster
    SymbolDecl::new("Broadcaster", "core.broadcaster", "Broadcaster"),
    // element
    SymbolDecl::new("Element", "core.element", "Element"),
    // event
    SymbolDecl::new("Event", "core.event", "Event"),
    SymbolDecl::new("EventStatus", "core.event", "EventStatus"),
    SymbolDecl::new("Execution", "core.event", "Execution"),
    // eventbus
    SymbolDecl::new("EventBus", "core.eventbus", "EventBus"),
    SymbolDecl::new("Handler", "core.eventbus", "Handler"),
    // flow
    SymbolDecl::new("Flow", "core.flow", "Flow"),
    // graph
    SymbolDecl::new("Edge", "core.graph", "Edge"),
    SymbolDecl::new("EdgeCondition", "core.graph", "EdgeCondition"),
    SymbolDecl::new("Graph", "core.graph", "Graph"),
    // node
    SymbolDecl::new("DEFAULT_NODE_CONFIG", "core.node", "DEFAULT_NODE_CONFIG"),
    SymbolDecl::new("NODE_REGISTRY", "core.node", "NODE_REGISTRY"),
    SymbolDecl::new("PERSISTABLE_NODE_REGISTRY", "core.node", "PERSISTABLE_NODE_REGISTRY"),
    SymbolDecl::new("Node", "core.node", "Node"),
    SymbolDecl::new("NodeConfig", "core.node", "NodeConfig"),
    SymbolDecl::new("create_node", "core.node", "create_node"),
    SymbolDecl::new("generate_ddl", "core.node", "generate_ddl"),
    // phrase
    SymbolDecl::new("PHRASE_REGISTRY", "core.phrase", "PHRASE_REGISTRY"),
    SymbolDecl::new("Phrase", "core.phrase", "Phrase"),
    SymbolDecl::new("PhraseConfig", "core.phrase", "PhraseConfig"),
    SymbolDecl::new("PhraseError", "core.phrase", "PhraseError"),
    SymbolDecl::new("RequirementNotMet", "core.phrase", "RequirementNotMet"),
    SymbolDecl::new("create_phrase", "core.phrase", "create_phrase"),
    SymbolDecl::new("get_phrase", "core.phrase", "get_phrase"),
    SymbolDecl::new("list_phrases", "core.phrase", "list_phrases"),
    // pile
    SymbolDecl::new("Pile", "core.pile", "Pile"),
    // processor
    SymbolDecl::new("Executor", "core.processor", "Executor"),
    SymbolDecl::new("Processor", "core.processor", "Processor"),
    // progression
    SymbolDecl::new("Progression", "core.progression", "Progression"),
];

/// Runtime registrations for the core surface.
///
/// Returns a builder with every core symbol already registered; the embedding
/// application attaches one provider per id in [`CORE_PROVIDERS`] and calls
/// `build()`. Kept as a hand-maintained list (not derived from
/// [`CORE_SURFACE`]) so the mirror-consistency test actually checks
/// something.
pub fn core_surface() -> SurfaceBuilder {
    SurfaceBuilder::new("kron.core")
        .reexport("core.broadcaster", "Broadcaster")
        .reexport("core.element", "Element")
        .reexport("core.event", "Event")
        .reexport("core.event", "EventStatus")
        .reexport("core.event", "Execution")
        .reexport("core.eventbus", "EventBus")
        .reexport("core.eventbus", "Handler")
        .reexport("core.flow", "Flow")
        .reexport("core.graph", "Edge")
        .reexport("core.graph", "EdgeCondition")
        .reexport("core.graph", "Graph")
        .reexport("core.node", "DEFAULT_NODE_CONFIG")
        .reexport("core.node", "NODE_REGISTRY")
        .reexport("core.node", "PERSISTABLE_NODE_REGISTRY")
        .reexport("core.node", "Node")
        .reexport("core.node", "NodeConfig")
        .reexport("core.node", "create_node")
        .reexport("core.node", "generate_ddl")
        .reexport("core.phrase", "PHRASE_REGISTRY")
        .reexport("core.phrase", "Phrase")
        .reexport("core.phrase", "PhraseConfig")
        .reexport("core.phrase", "PhraseError")
        .reexport("core.phrase", "RequirementNotMet")
        .reexport("core.phrase", "create_phrase")
        .reexport("core.phrase", "get_phrase")
        .reexport("core.phrase", "list_phrases")
        .reexport("core.pile", "Pile")
        .reexport("core.processor", "Executor")
        .reexport("core.processor", "Processor")
        .reexport("core.progression", "Progression")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_covers_every_core_provider() {
        for decl in CORE_SURFACE {
            assert!(
                CORE_PROVIDERS.contains(&decl.provider),
                "'{}' declares unknown provider '{}'",
                decl.symbol,
                decl.provider
            );
        }
    }

    #[test]
    fn test_mirror_has_no_duplicate_symbols() {
        let mut names: Vec<_> = CORE_SURFACE.iter().map(|d| d.symbol).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CORE_SURFACE.len());
    }
}
