//! Общая модель данных: схемы, сущности, коллекции и каталоги сообщений.
//!
//! Крейт не зависит от веба и используется фронтендом как есть.

pub mod domain;
pub mod shared;
