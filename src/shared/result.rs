/// Crate-wide Result alias backed by anyhow::Error.
/// Infrastructure code attaches context with `.context(...)` before bubbling up.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
