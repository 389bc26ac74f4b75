use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::models::Message;

#[derive(Debug)]
pub enum StoreError {
    ReadFailed(io::Error),
    WriteFailed(io::Error),
    CorruptData(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::ReadFailed(e) => write!(f, "Ошибка чтения файла сообщений: {}", e),
            StoreError::WriteFailed(e) => write!(f, "Ошибка записи файла сообщений: {}", e),
            StoreError::CorruptData(e) => write!(f, "Файл сообщений повреждён: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

// Хранилище сообщений: вся коллекция лежит в одном JSON-файле и
// переписывается целиком при каждой мутации.
//
// Записи между собой не сериализуются: каждая мутация — это полное
// чтение-изменение-запись без блокировок, поэтому два одновременных
// submit могут потерять одно из сообщений (побеждает последняя запись).
// Для личной контактной формы это осознанное ограничение.
#[derive(Debug, Clone)]
pub struct MessageStore {
    path: PathBuf,
}

impl MessageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Чтение всей коллекции. Отсутствующий файл — пустая коллекция, а не ошибка.
    pub async fn load_all(&self) -> Result<Vec<Message>, StoreError> {
        let data = match fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::ReadFailed(e)),
        };

        serde_json::from_slice(&data).map_err(StoreError::CorruptData)
    }

    // Атомарная замена всей коллекции: запись во временный файл рядом
    // с целевым, затем rename. Прерванная запись не затрагивает
    // предыдущее состояние файла.
    pub async fn save_all(&self, messages: &[Message]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(messages).map_err(StoreError::CorruptData)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(StoreError::WriteFailed)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json).await.map_err(StoreError::WriteFailed)?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(StoreError::WriteFailed)
    }
}
