//! Реестр схем, загруженных с сервера метаданных
//!
//! Реестр передаётся явно: компонент получает его аргументом, а не
//! достаёт из глобального состояния.

use serde::Deserialize;
use std::collections::HashMap;

use super::aggregate::Schema;
use crate::domain::a002_entity::Entity;
use crate::domain::common::ModelError;

/// Схемы, индексированные по имени типа
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaRegistry {
    schemata: HashMap<String, Schema>,
}

/// Ответ сервера метаданных: `{"schemata": {"Person": {...}, ...}}`
#[derive(Deserialize)]
struct MetadataPayload {
    #[serde(default)]
    schemata: HashMap<String, Schema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_schemata(schemata: impl IntoIterator<Item = Schema>) -> Self {
        let mut registry = Self::new();
        for schema in schemata {
            registry.insert(schema);
        }
        registry
    }

    /// Разобрать ответ сервера метаданных
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let payload: MetadataPayload = serde_json::from_str(json)?;
        let schemata = payload.schemata.into_iter().map(|(key, mut schema)| {
            if schema.name.is_empty() {
                schema.name = key;
            }
            schema
        });
        Ok(Self::from_schemata(schemata))
    }

    /// Добавить или заменить схему; возвращает предыдущее определение
    pub fn insert(&mut self, schema: Schema) -> Option<Schema> {
        self.schemata.insert(schema.name.clone(), schema)
    }

    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemata.get(name)
    }

    pub fn resolve(&self, entity: &Entity) -> Option<&Schema> {
        resolve_schema(self, entity)
    }

    pub fn len(&self) -> usize {
        self.schemata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemata.is_empty()
    }
}

/// Найти схему сущности в реестре
///
/// `None` означает, что схема ещё не загружена.
pub fn resolve_schema<'a>(registry: &'a SchemaRegistry, entity: &Entity) -> Option<&'a Schema> {
    registry.get(&entity.schema)
}
