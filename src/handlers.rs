use actix_web::{web, HttpResponse, Responder};

use crate::models::{AnalyticsEvent, ApiError, ContactRequest};
use crate::portfolio;
use crate::services::{ContactError, ContactService};

// Endpoint для проверки работоспособности
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "message": "Server is running"
    }))
}

// Статические данные портфолио
pub async fn get_portfolio() -> impl Responder {
    HttpResponse::Ok().json(portfolio::portfolio_data())
}

// Приём контактной формы
pub async fn submit_contact(
    contact_service: web::Data<ContactService>,
    request: web::Json<ContactRequest>,
) -> impl Responder {
    match contact_service.submit(request.into_inner()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Thank you for your message! I'll get back to you soon."
        })),
        Err(ContactError::MissingFields) => HttpResponse::BadRequest().json(ApiError::new(
            "Missing required fields",
            "Please fill in all required fields.",
        )),
        Err(ContactError::InvalidEmail) => HttpResponse::BadRequest().json(ApiError::new(
            "Invalid email format",
            "Please provide a valid email address.",
        )),
        Err(e) => {
            // Детали ошибки хранилища остаются в логе, клиенту — общий текст
            log::error!("Ошибка при сохранении сообщения: {}", e);
            HttpResponse::InternalServerError().json(ApiError::new(
                "Failed to send message",
                "Sorry, there was an error sending your message. Please try again later.",
            ))
        }
    }
}

// Заглушка аналитики: событие только логируется
pub async fn track_analytics(event: web::Json<AnalyticsEvent>) -> impl Responder {
    let event = event.into_inner();
    log::info!(
        "Событие аналитики: {} {}",
        event.event,
        event.data.unwrap_or(serde_json::Value::Null)
    );

    HttpResponse::Ok().json(serde_json::json!({ "success": true }))
}

// Конфигурация публичных маршрутов
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health_check))
            .route("/portfolio", web::get().to(get_portfolio))
            .route("/contact", web::post().to(submit_contact))
            .route("/analytics", web::post().to(track_analytics)),
    );
}
