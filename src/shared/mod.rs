/// Shared utilities: error taxonomy and the crate-wide Result alias.
pub mod error;
pub mod result;

pub use error::ScanServiceError;
pub use result::Result;
