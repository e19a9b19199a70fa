//! Parser backend implementations.
//!
//! Each backend implements the [`Parser`](crate::Parser) trait, so the
//! pipeline is generic over the grammar engine behind it. The built-in
//! backend is heuristic and always available; an engine wrapping a real
//! dependency parser slots in by implementing the same trait.

pub mod heuristic;

pub use heuristic::HeuristicParser;
