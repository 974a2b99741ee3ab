/// Scanning core: domain types, manifest parsing and aggregation services.
pub mod domain;
pub mod services;
