use thiserror::Error;

/// Ошибки разбора внешних данных (реестр схем, сущности, каталоги сообщений)
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid locale tag '{0}'")]
    InvalidLocale(String),
}
