/// Adapters layer - concrete integrations with external systems.
pub mod outbound;
