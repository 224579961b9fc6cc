pub mod aggregate;
pub mod registry;

pub use aggregate::{PropertyDef, PropertyType, Schema};
pub use registry::{resolve_schema, SchemaRegistry};
