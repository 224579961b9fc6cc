use serde::{Deserialize, Serialize};

use crate::domain::common::de::string_or_number;

/// Коллекция-источник, из которой получена сущность
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Collection {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub summary: Option<String>,

    /// Код категории (`leak`, `company`, `sanctions`, ...)
    #[serde(default)]
    pub category: Option<String>,

    /// Коды стран в нижнем регистре
    #[serde(default)]
    pub countries: Vec<String>,

    /// Количество сущностей, если сервер его прислал
    #[serde(default)]
    pub count: Option<u64>,
}

impl Collection {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            ..Self::default()
        }
    }

    pub fn with_summary(mut self, summary: &str) -> Self {
        self.summary = Some(summary.to_string());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Описание без пустых строк
    pub fn summary_text(&self) -> Option<&str> {
        self.summary
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Ключ сообщения для подписи категории
    pub fn category_message_id(&self) -> Option<String> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(|c| format!("collection.category.{}", c))
    }
}
