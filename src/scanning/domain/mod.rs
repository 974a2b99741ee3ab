/// Domain layer - Pure types and logic of the scan-and-aggregate pipeline.
///
/// Nothing in this module performs I/O; network and storage live behind the
/// outbound ports and in the application layer.
pub mod application;
pub mod manifest;
pub mod package;
pub mod vulnerability;

pub use application::Application;
pub use manifest::{parse_manifest, Dependency};
pub use package::{Package, UNKNOWN_VERSION, VERSION_NOT_SPECIFIED};
pub use vulnerability::Vulnerability;
