use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::a001_schema::Schema;
use crate::domain::a003_collection::Collection;
use crate::domain::common::de::string_or_number;
use crate::domain::common::ModelError;

/// Тег классификации сущностей, у которых есть собственный заголовок
pub const THING: &str = "Thing";

// ============================================================================
// Property values
// ============================================================================

/// Ссылка на другую сущность внутри значения свойства
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    #[serde(default)]
    pub schema: Option<String>,

    #[serde(default)]
    pub name: Option<String>,
}

/// Значение свойства: строка или вложенная сущность
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    Entity(EntityRef),
}

impl PropertyValue {
    pub fn text(value: &str) -> Self {
        Self::Text(value.to_string())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Entity(_) => None,
        }
    }

    /// Текст для показа: строка как есть, у ссылки имя или идентификатор
    pub fn caption(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Entity(r) => r
                .name
                .as_deref()
                .filter(|n| !n.is_empty())
                .unwrap_or(&r.id),
        }
    }
}

// ============================================================================
// Entity
// ============================================================================

/// Сущность в том виде, в котором её отдаёт API
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entity {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// Имя типа; ключ в реестре схем
    pub schema: String,

    /// Теги классификации (цепочка схем)
    #[serde(default)]
    pub schemata: Vec<String>,

    /// Заголовок, вычисленный сервером
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub properties: HashMap<String, Vec<PropertyValue>>,

    #[serde(default)]
    pub collection: Option<Collection>,
}

impl Entity {
    pub fn new(id: &str, schema: &str) -> Self {
        Self {
            id: id.to_string(),
            schema: schema.to_string(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_schemata(mut self, schemata: &[&str]) -> Self {
        self.schemata = schemata.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_values(mut self, property: &str, values: Vec<PropertyValue>) -> Self {
        self.properties.insert(property.to_string(), values);
        self
    }

    pub fn with_collection(mut self, collection: Collection) -> Self {
        self.collection = Some(collection);
        self
    }

    /// Есть ли тег классификации
    pub fn is_a(&self, tag: &str) -> bool {
        self.schemata.iter().any(|s| s == tag)
    }

    pub fn is_thing(&self) -> bool {
        self.is_a(THING)
    }

    /// Значения свойства; пустой срез, если свойства нет
    pub fn values(&self, property: &str) -> &[PropertyValue] {
        self.properties
            .get(property)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_values(&self, property: &str) -> bool {
        !self.values(property).is_empty()
    }

    /// Заголовок сущности
    ///
    /// Сначала имя от сервера, затем первое непустое значение из
    /// свойств-заголовков схемы.
    pub fn caption<'a>(&'a self, schema: Option<&Schema>) -> Option<&'a str> {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return Some(name);
        }
        let schema = schema?;
        schema
            .caption_properties()
            .flat_map(|property| self.values(property))
            .map(PropertyValue::caption)
            .find(|caption| !caption.trim().is_empty())
    }
}
