use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Сообщение из контактной формы — единственная персистентная сущность
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

// DTO для отправки контактной формы. Отсутствующие поля приходят
// пустыми, чтобы валидация вернула понятный ответ, а не ошибку разбора
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    pub subject: Option<String>,
}

// DTO события аналитики
#[derive(Debug, Deserialize)]
pub struct AnalyticsEvent {
    pub event: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

// Общий ответ об ошибке API: error — машинное описание, message — текст для пользователя
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

// Короткий ответ об ошибке (без пользовательского текста)
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
