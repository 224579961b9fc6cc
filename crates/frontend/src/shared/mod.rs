pub mod date_utils;
pub mod i18n;
pub mod icons;
