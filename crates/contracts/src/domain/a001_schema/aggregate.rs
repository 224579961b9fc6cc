use serde::{Deserialize, Serialize};

use crate::domain::a002_entity::Entity;
use crate::domain::common::de::bool_or_null;

// ============================================================================
// Property definition
// ============================================================================

/// Тип значения свойства; определяет, как значение показывается в интерфейсе
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[default]
    String,
    Text,
    Name,
    Date,
    Url,
    Email,
    Country,
    Entity,
    #[serde(other)]
    Other,
}

/// Описание одного свойства схемы
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PropertyDef {
    /// Имя свойства; при разборе схемы берётся из ключа, если не задано явно
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub label: Option<String>,

    /// Свойство-заголовок: показывается в названии сущности, а не в списке
    #[serde(default, deserialize_with = "bool_or_null")]
    pub caption: bool,

    #[serde(default, rename = "type")]
    pub property_type: PropertyType,
}

impl PropertyDef {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = property_type;
        self
    }

    pub fn as_caption(mut self) -> Self {
        self.caption = true;
        self
    }

    /// Подпись для интерфейса; пустая подпись заменяется именем
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .filter(|label| !label.trim().is_empty())
            .unwrap_or(&self.name)
    }
}

// ============================================================================
// Schema
// ============================================================================

/// Определение типа сущности
///
/// `properties` хранится в порядке документа, из которого схема была
/// прочитана: именно в этом порядке свойства выводятся на экран.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub plural: Option<String>,

    #[serde(default)]
    pub icon: Option<String>,

    /// Цепочка предков, включая саму схему
    #[serde(default)]
    pub schemata: Vec<String>,

    /// Свойства, которые показываются всегда, даже без значений
    #[serde(default)]
    pub featured: Vec<String>,

    /// Свойства, из которых собирается заголовок сущности
    #[serde(default)]
    pub caption: Vec<String>,

    #[serde(default, with = "ordered_properties")]
    pub properties: Vec<PropertyDef>,
}

impl Schema {
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            ..Self::default()
        }
    }

    pub fn with_featured(mut self, featured: &[&str]) -> Self {
        self.featured = featured.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_caption(mut self, caption: &[&str]) -> Self {
        self.caption = caption.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_property(mut self, property: PropertyDef) -> Self {
        self.properties.push(property);
        self
    }

    pub fn is_featured(&self, name: &str) -> bool {
        self.featured.iter().any(|f| f == name)
    }

    /// Название типа; пустое название заменяется именем схемы
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    pub fn plural_label(&self) -> &str {
        self.plural
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| self.display_label())
    }

    /// Попадает ли свойство в список на информационной панели
    ///
    /// Свойства-заголовки не выводятся никогда; остальные выводятся, если
    /// они отмечены как featured или у сущности есть хотя бы одно значение.
    pub fn is_listed(&self, property: &PropertyDef, entity: &Entity) -> bool {
        !property.caption && (self.is_featured(&property.name) || entity.has_values(&property.name))
    }

    /// Свойства для информационной панели в порядке `properties`
    pub fn listed_properties<'a>(
        &'a self,
        entity: &'a Entity,
    ) -> impl Iterator<Item = &'a PropertyDef> + 'a {
        self.properties
            .iter()
            .filter(move |property| self.is_listed(property, entity))
    }

    /// Имена свойств, из которых строится заголовок сущности
    pub fn caption_properties(&self) -> impl Iterator<Item = &str> {
        let flagged = self
            .properties
            .iter()
            .filter(|p| p.caption && !self.caption.contains(&p.name))
            .map(|p| p.name.as_str());
        self.caption.iter().map(String::as_str).chain(flagged)
    }
}

/// (De)serializes `Vec<PropertyDef>` as a JSON object keyed by property name,
/// keeping document order.
mod ordered_properties {
    use super::PropertyDef;
    use serde::de::{MapAccess, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(properties: &[PropertyDef], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(properties.iter().map(|p| (p.name.as_str(), p)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<PropertyDef>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(PropertiesVisitor)
    }

    struct PropertiesVisitor;

    impl<'de> Visitor<'de> for PropertiesVisitor {
        type Value = Vec<PropertyDef>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of property name to property definition")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut properties: Vec<PropertyDef> = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, mut property)) = map.next_entry::<String, PropertyDef>()? {
                if property.name.is_empty() {
                    property.name = key;
                }
                // Повторный ключ заменяет определение, но не меняет позицию
                match properties.iter_mut().find(|p| p.name == property.name) {
                    Some(existing) => *existing = property,
                    None => properties.push(property),
                }
            }
            Ok(properties)
        }
    }
}
