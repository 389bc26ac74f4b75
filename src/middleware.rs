use actix_web::{
    body::MessageBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpResponse,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

// Middleware для защиты админских маршрутов общим секретом.
// Если секрет не настроен, маршруты остаются открытыми (режим разработки).
pub struct AdminAuth {
    secret: Option<Rc<String>>,
}

impl AdminAuth {
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.map(Rc::new),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AdminAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse;
    type Error = Error;
    type InitError = ();
    type Transform = AdminAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminAuthService {
            service: Rc::new(service),
            secret: self.secret.clone(),
        }))
    }
}

pub struct AdminAuthService<S> {
    service: Rc<S>,
    secret: Option<Rc<String>>,
}

impl<S, B> Service<ServiceRequest> for AdminAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let secret = self.secret.clone();

        Box::pin(async move {
            let expected = match secret {
                Some(s) => s,
                None => {
                    // Секрет не настроен — пропускаем без проверки
                    let res = service.call(req).await?;
                    return Ok(res.map_into_boxed_body());
                }
            };

            // Секрет принимается заголовком или query-параметром
            match extract_secret(&req) {
                Some(provided) if provided == *expected => {
                    let res = service.call(req).await?;
                    Ok(res.map_into_boxed_body())
                }
                _ => {
                    let (http_req, _) = req.into_parts();
                    let response = HttpResponse::Unauthorized().json(serde_json::json!({
                        "success": false,
                        "error": "Unauthorized"
                    }));
                    Ok(ServiceResponse::new(http_req, response).map_into_boxed_body())
                }
            }
        })
    }
}

// Извлечение секрета из заголовка X-Admin-Secret или параметра ?secret=
fn extract_secret(req: &ServiceRequest) -> Option<String> {
    if let Some(value) = req.headers().get("X-Admin-Secret") {
        if let Ok(s) = value.to_str() {
            return Some(s.to_string());
        }
    }

    req.query_string()
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "secret")
        .map(|(_, value)| value.to_string())
}
