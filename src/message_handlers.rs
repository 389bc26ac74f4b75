use actix_web::{web, HttpResponse, Responder};

use crate::models::{ApiError, ErrorResponse};
use crate::services::{ContactError, ContactService};

// Список всех сообщений (новые сначала)
pub async fn list_messages(contact_service: web::Data<ContactService>) -> impl Responder {
    match contact_service.list_all().await {
        Ok(messages) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "count": messages.len(),
            "messages": messages,
        })),
        Err(e) => {
            log::error!("Ошибка при чтении сообщений: {}", e);
            HttpResponse::InternalServerError().json(ApiError::new(
                "Failed to load messages",
                "Sorry, there was an error loading messages. Please try again later.",
            ))
        }
    }
}

// Пометить сообщение прочитанным
pub async fn mark_message_read(
    contact_service: web::Data<ContactService>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match contact_service.mark_read(&id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Message marked as read"
        })),
        Err(ContactError::NotFound) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Message not found".to_string(),
        }),
        Err(e) => {
            log::error!("Ошибка при обновлении сообщения {}: {}", id, e);
            HttpResponse::InternalServerError().json(ApiError::new(
                "Failed to update message",
                "Sorry, there was an error updating the message. Please try again later.",
            ))
        }
    }
}

// Конфигурация админских маршрутов (монтируются под /api/messages)
pub fn configure_message_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_messages))
        .route("/{id}/read", web::put().to(mark_message_read));
}
