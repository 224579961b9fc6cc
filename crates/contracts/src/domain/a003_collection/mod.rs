pub mod aggregate;

pub use aggregate::Collection;
