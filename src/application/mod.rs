/// Application layer - use cases, DTOs and the in-process store.
pub mod dto;
pub mod store;
pub mod use_cases;
