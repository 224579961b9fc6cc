mod label;
mod property;

pub use label::SchemaLabel;
pub use property::{display_text, value_href, PropertyName, PropertyValues, VALUE_SEPARATOR};
