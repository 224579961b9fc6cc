//! Каталоги переводов интерфейса
//!
//! Каталог — плоский JSON-объект `id -> текст` для одной локали. Если
//! перевода нет, показывается текст по умолчанию, переданный вызывающим.

use std::collections::HashMap;

use crate::domain::common::ModelError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    locale: String,
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// Каталог без переводов: всегда отдаёт текст по умолчанию
    pub fn empty(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            messages: HashMap::new(),
        }
    }

    pub fn from_json(locale: &str, json: &str) -> Result<Self, ModelError> {
        if !is_valid_locale(locale) {
            return Err(ModelError::InvalidLocale(locale.to_string()));
        }
        let messages: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self {
            locale: locale.to_string(),
            messages,
        })
    }

    pub fn with_message(mut self, id: &str, text: &str) -> Self {
        self.messages.insert(id.to_string(), text.to_string());
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Перевод сообщения или `default`, если перевода нет или он пустой
    pub fn get<'a>(&'a self, id: &str, default: &'a str) -> &'a str {
        self.messages
            .get(id)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
            .unwrap_or(default)
    }
}

/// Подобрать локаль из доступных
///
/// Сначала точное совпадение без учёта регистра, затем по основному
/// подтегу (`ru-RU` -> `ru`).
pub fn negotiate_locale<'a>(requested: &str, available: &[&'a str]) -> Option<&'a str> {
    let requested = requested.trim().replace('_', "-").to_ascii_lowercase();
    if requested.is_empty() {
        return None;
    }
    if let Some(exact) = available
        .iter()
        .find(|locale| locale.to_ascii_lowercase() == requested)
    {
        return Some(*exact);
    }
    let primary = requested.split('-').next().unwrap_or(&requested);
    available
        .iter()
        .find(|locale| locale.to_ascii_lowercase() == primary)
        .copied()
}

fn is_valid_locale(tag: &str) -> bool {
    !tag.is_empty()
        && tag.split(['-', '_']).all(|subtag| {
            (1..=8).contains(&subtag.len()) && subtag.chars().all(|c| c.is_ascii_alphanumeric())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_translation_uses_default() {
        let catalog = MessageCatalog::empty("en");
        assert_eq!(catalog.get("entity.info.source", "Source"), "Source");
    }

    #[test]
    fn test_translation_found() {
        let catalog =
            MessageCatalog::from_json("ru", r#"{"entity.info.source": "Источник"}"#).unwrap();
        assert_eq!(catalog.locale(), "ru");
        assert_eq!(catalog.get("entity.info.source", "Source"), "Источник");
    }

    #[test]
    fn test_empty_translation_uses_default() {
        let catalog = MessageCatalog::empty("de").with_message("entity.info.source", "");
        assert_eq!(catalog.get("entity.info.source", "Source"), "Source");
    }

    #[test]
    fn test_invalid_catalogs() {
        assert!(matches!(
            MessageCatalog::from_json("", "{}"),
            Err(ModelError::InvalidLocale(_))
        ));
        assert!(matches!(
            MessageCatalog::from_json("ru", r#"{"a": {"nested": true}}"#),
            Err(ModelError::Json(_))
        ));
    }

    #[test]
    fn test_negotiate_locale() {
        let available = ["en", "ru", "pt-BR"];
        assert_eq!(negotiate_locale("ru-RU", &available), Some("ru"));
        assert_eq!(negotiate_locale("pt_br", &available), Some("pt-BR"));
        assert_eq!(negotiate_locale("EN", &available), Some("en"));
        assert_eq!(negotiate_locale("fr-FR", &available), None);
        assert_eq!(negotiate_locale("  ", &available), None);
    }
}
