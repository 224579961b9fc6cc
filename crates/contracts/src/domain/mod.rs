pub mod a001_schema;
pub mod a002_entity;
pub mod a003_collection;
pub mod common;
