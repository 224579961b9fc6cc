pub mod aggregate;

pub use aggregate::{Entity, EntityRef, PropertyValue};
