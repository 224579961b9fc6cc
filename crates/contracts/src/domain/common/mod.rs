//! Common types shared by schemas, entities and collections

pub mod de;
pub mod error;

// Re-exports
pub use error::ModelError;
