pub mod models;
pub mod store;
pub mod services;
pub mod notifier;
pub mod portfolio;
pub mod handlers;
pub mod message_handlers;
pub mod middleware;
