use chrono::Utc;
use tempfile::tempdir;

use portfolio_backend::models::Message;
use portfolio_backend::store::{MessageStore, StoreError};

fn sample_message(id: &str, name: &str) -> Message {
    Message {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name),
        subject: None,
        message: "Привет!".to_string(),
        timestamp: Utc::now(),
        read: false,
    }
}

#[cfg(test)]
mod message_store_tests {
    use super::*;

    #[actix_web::test]
    async fn test_load_from_missing_file_returns_empty() {
        let dir = tempdir().unwrap();
        let store = MessageStore::new(dir.path().join("messages.json"));

        // Отсутствующий файл — не ошибка, а пустая коллекция
        let messages = store.load_all().await.unwrap();
        assert!(messages.is_empty());
    }

    #[actix_web::test]
    async fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = MessageStore::new(dir.path().join("messages.json"));

        let original = vec![
            sample_message("id-1", "ann"),
            sample_message("id-2", "bob"),
        ];
        store.save_all(&original).await.unwrap();

        let loaded = store.load_all().await.unwrap();
        assert_eq!(loaded, original);

        // saveAll(loadAll()) идемпотентен: содержимое и порядок не меняются
        store.save_all(&loaded).await.unwrap();
        let reloaded = store.load_all().await.unwrap();
        assert_eq!(reloaded, original);
    }

    #[actix_web::test]
    async fn test_save_replaces_previous_collection() {
        let dir = tempdir().unwrap();
        let store = MessageStore::new(dir.path().join("messages.json"));

        store
            .save_all(&[sample_message("old", "old_user")])
            .await
            .unwrap();
        store
            .save_all(&[sample_message("new", "new_user")])
            .await
            .unwrap();

        let loaded = store.load_all().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "new");
    }

    #[actix_web::test]
    async fn test_corrupt_file_is_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("messages.json");
        std::fs::write(&path, "{ это не json-массив").unwrap();

        let store = MessageStore::new(&path);
        let result = store.load_all().await;

        assert!(matches!(result, Err(StoreError::CorruptData(_))));
    }

    #[actix_web::test]
    async fn test_parent_directory_created_on_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("messages.json");

        let store = MessageStore::new(&path);
        store.save_all(&[sample_message("id-1", "ann")]).await.unwrap();

        assert!(path.exists());
        assert_eq!(store.load_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_no_temp_file_left_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("messages.json");

        let store = MessageStore::new(&path);
        store.save_all(&[sample_message("id-1", "ann")]).await.unwrap();

        // После rename временного файла остаться не должно
        let tmp = path.with_extension("json.tmp");
        assert!(!tmp.exists());
        assert!(path.exists());
    }

    #[actix_web::test]
    async fn test_subject_omitted_when_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("messages.json");
        let store = MessageStore::new(&path);

        let mut with_subject = sample_message("id-1", "ann");
        with_subject.subject = Some("Вопрос".to_string());
        let without_subject = sample_message("id-2", "bob");

        store
            .save_all(&[with_subject, without_subject])
            .await
            .unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw.matches("\"subject\"").count(), 1);
    }
}

#[cfg(test)]
mod store_error_tests {
    use super::*;

    #[test]
    fn test_read_error_display() {
        let error = StoreError::ReadFailed(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        let text = format!("{}", error);
        assert!(text.contains("чтения"));
    }

    #[test]
    fn test_write_error_display() {
        let error = StoreError::WriteFailed(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk full",
        ));

        let text = format!("{}", error);
        assert!(text.contains("записи"));
    }

    #[test]
    fn test_corrupt_error_display() {
        let error = StoreError::CorruptData(
            serde_json::from_str::<Vec<Message>>("не json").unwrap_err(),
        );

        let text = format!("{}", error);
        assert!(text.contains("повреждён"));
    }

    #[test]
    fn test_error_trait_implementation() {
        use std::error::Error;

        let error: Box<dyn Error> = Box::new(StoreError::ReadFailed(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        )));

        assert!(!format!("{}", error).is_empty());
    }
}
