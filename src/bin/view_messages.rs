use std::env;

use dotenv::dotenv;

use portfolio_backend::store::MessageStore;

// Утилита для просмотра сообщений из контактной формы.
// Использование: cargo run --bin view_messages

#[tokio::main]
async fn main() {
    dotenv().ok();

    let messages_file =
        env::var("MESSAGES_FILE").unwrap_or_else(|_| "data/messages.json".to_string());
    let store = MessageStore::new(&messages_file);

    let messages = match store.load_all().await {
        Ok(messages) => messages,
        Err(e) => {
            eprintln!("Не удалось прочитать сообщения: {}", e);
            std::process::exit(1);
        }
    };

    println!("\nСообщения контактной формы\n");
    println!("Всего сообщений: {}", messages.len());

    if messages.is_empty() {
        println!("\nСообщений пока нет. Файл появится после первой отправки формы.");
        return;
    }

    for (index, msg) in messages.iter().enumerate() {
        let status = if msg.read { "(прочитано)" } else { "(НОВОЕ)" };
        println!("\n--- Сообщение {} {} ---", index + 1, status);
        println!("ID: {}", msg.id);
        println!("От: {} <{}>", msg.name, msg.email);
        if let Some(subject) = &msg.subject {
            println!("Тема: {}", subject);
        }
        println!(
            "Дата: {}",
            msg.timestamp
                .with_timezone(&chrono::Local)
                .format("%d.%m.%Y %H:%M:%S")
        );
        println!("Текст:");
        println!("{}", msg.message);
    }
}
