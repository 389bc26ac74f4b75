use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::models::{ContactRequest, Message};
use crate::notifier::Notifier;
use crate::store::{MessageStore, StoreError};

// Разрешительная проверка формата local@domain.tld, не полная валидация по RFC
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("некорректное регулярное выражение email")
});

#[derive(Debug)]
pub enum ContactError {
    MissingFields,
    InvalidEmail,
    NotFound,
    Storage(StoreError),
}

impl std::fmt::Display for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactError::MissingFields => write!(f, "Не заполнены обязательные поля"),
            ContactError::InvalidEmail => write!(f, "Некорректный формат email"),
            ContactError::NotFound => write!(f, "Сообщение не найдено"),
            ContactError::Storage(e) => write!(f, "Ошибка хранилища: {}", e),
        }
    }
}

impl std::error::Error for ContactError {}

impl From<StoreError> for ContactError {
    fn from(e: StoreError) -> Self {
        ContactError::Storage(e)
    }
}

pub struct ContactService {
    store: MessageStore,
    notifier: Arc<dyn Notifier>,
}

impl ContactService {
    pub fn new(store: MessageStore, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    // Приём заявки из контактной формы
    pub async fn submit(&self, request: ContactRequest) -> Result<Message, ContactError> {
        let name = request.name.trim();
        let email = request.email.trim();
        let body = request.message.trim();

        // Проверка обязательных полей после обрезки пробелов
        if name.is_empty() || email.is_empty() || body.is_empty() {
            return Err(ContactError::MissingFields);
        }

        if !EMAIL_REGEX.is_match(email) {
            return Err(ContactError::InvalidEmail);
        }

        // Пустая тема после обрезки считается отсутствующей
        let subject = request
            .subject
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        let message = Message {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            subject,
            message: body.to_string(),
            timestamp: Utc::now(),
            read: false,
        };

        // Чтение-изменение-запись всей коллекции; новые сообщения — в начало
        let mut messages = self.store.load_all().await?;
        messages.insert(0, message.clone());
        self.store.save_all(&messages).await?;

        // Уведомление уходит в фоне и не влияет на результат запроса
        let notifier = Arc::clone(&self.notifier);
        let saved = message.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.notify(&saved).await {
                log::warn!(
                    "Не удалось отправить уведомление о сообщении {}: {}",
                    saved.id,
                    e
                );
            }
        });

        Ok(message)
    }

    // Пометка сообщения прочитанным; повторный вызов идемпотентен
    pub async fn mark_read(&self, id: &str) -> Result<(), ContactError> {
        let mut messages = self.store.load_all().await?;

        let message = messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(ContactError::NotFound)?;
        message.read = true;

        self.store.save_all(&messages).await?;
        Ok(())
    }

    // Все сообщения в порядке хранения (новые сначала)
    pub async fn list_all(&self) -> Result<Vec<Message>, ContactError> {
        Ok(self.store.load_all().await?)
    }
}
