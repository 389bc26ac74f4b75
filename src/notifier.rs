use async_trait::async_trait;

use crate::models::Message;

// Ошибка доставки уведомления; всегда гасится на месте и только логируется
#[derive(Debug)]
pub struct NotifierError(pub String);

impl std::fmt::Display for NotifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for NotifierError {}

// Внешний коллаборатор для уведомлений о новых сообщениях.
// Доставка best-effort: сбой не влияет на обработку запроса.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &Message) -> Result<(), NotifierError>;
}

// Реализация по умолчанию: пишет уведомление в лог.
// Сюда подключается SMTP-доставка, когда она настроена.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, message: &Message) -> Result<(), NotifierError> {
        log::info!(
            "Новое сообщение {} от {} <{}>, тема: {}",
            message.id,
            message.name,
            message.email,
            message.subject.as_deref().unwrap_or("без темы")
        );
        Ok(())
    }
}
