use async_trait::async_trait;

use crate::api::http::{HttpRequest, HttpResponse};

/// A request handler decoupled from any web framework. Implementations hold
/// no per-request state, so one instance can serve concurrent requests.
#[async_trait]
pub trait Controller<T: Send + 'static>: Send + Sync {
    async fn handle(&self, request: HttpRequest<T>) -> HttpResponse;
}
