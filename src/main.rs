use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::{http, middleware as actix_middleware, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use std::sync::Arc;

use portfolio_backend::middleware::AdminAuth;
use portfolio_backend::notifier::LogNotifier;
use portfolio_backend::services::ContactService;
use portfolio_backend::store::MessageStore;
use portfolio_backend::{handlers, message_handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Загрузка переменных окружения
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
    let messages_file =
        env::var("MESSAGES_FILE").unwrap_or_else(|_| "data/messages.json".to_string());
    let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "dist".to_string());

    let admin_secret = env::var("ADMIN_SECRET").ok().filter(|s| !s.is_empty());
    if admin_secret.is_none() {
        println!("WARNING: ADMIN_SECRET не задан, /api/messages доступен без авторизации");
    }

    // Список разрешённых источников для production; в разработке CORS открыт
    let allowed_origins: Vec<String> = env::var("CORS_ORIGIN")
        .map(|v| v.split(',').map(|o| o.trim().to_string()).collect())
        .unwrap_or_else(|_| {
            vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
                "http://localhost:5174".to_string(),
                "https://fr0strated.me".to_string(),
                "https://www.fr0strated.me".to_string(),
            ]
        });

    // Создание сервисов
    let store = MessageStore::new(&messages_file);
    let contact_service = web::Data::new(ContactService::new(store, Arc::new(LogNotifier)));

    let production = app_env == "production";
    let bind_address = format!("{}:{}", host, port);

    println!("Сервер портфолио запущен на http://{}", bind_address);
    println!("Окружение: {}", app_env);
    println!("Файл сообщений: {}", messages_file);
    println!("\n=== API Endpoints ===");
    println!("Health Check:");
    println!("  GET  http://{}/api/health", bind_address);
    println!("\nPortfolio:");
    println!("  GET  http://{}/api/portfolio", bind_address);
    println!("\nContact Form:");
    println!("  POST http://{}/api/contact", bind_address);
    println!("  POST http://{}/api/analytics", bind_address);
    println!("\nAdmin:");
    println!("  GET  http://{}/api/messages", bind_address);
    println!("  PUT  http://{}/api/messages/{{id}}/read", bind_address);
    println!("\n===================\n");

    // Запуск HTTP сервера
    HttpServer::new(move || {
        let cors = if production {
            let mut cors = Cors::default()
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec![http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
                .supports_credentials();
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        } else {
            // В разработке разрешаем все источники
            Cors::permissive()
        };

        let app = App::new()
            .app_data(contact_service.clone())
            .wrap(actix_middleware::Logger::default())
            .wrap(cors)
            // Админский scope регистрируется раньше общего "/api":
            // роутер выбирает первый подходящий префикс
            .service(
                web::scope("/api/messages")
                    .wrap(AdminAuth::new(admin_secret.clone()))
                    .configure(message_handlers::configure_message_routes),
            )
            .configure(handlers::configure_routes);

        // В production раздаём собранный фронтенд; неизвестные пути
        // получают index.html (SPA-роутинг на клиенте)
        if production {
            let index_file = format!("{}/index.html", static_dir);
            app.service(
                Files::new("/", &static_dir)
                    .index_file("index.html")
                    .default_handler(fn_service(move |req: ServiceRequest| {
                        let index_file = index_file.clone();
                        async move {
                            let (req, _) = req.into_parts();
                            let file = NamedFile::open_async(&index_file).await?;
                            let res = file.into_response(&req);
                            Ok(ServiceResponse::new(req, res))
                        }
                    })),
            )
        } else {
            app
        }
    })
    .bind(&bind_address)?
    .run()
    .await
}
