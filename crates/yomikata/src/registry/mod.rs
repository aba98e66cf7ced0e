//! registry module
pub mod priority_registry;

/// Re-export
pub use priority_registry::PriorityRegistry;
