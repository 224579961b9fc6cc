pub mod info;
mod label;

pub use info::{EntityInfoMode, EntityInfoView, EntityInfoViewModel};
pub use label::{truncate_title, EntityLabel};
