//! Request pipeline
//!
//! Every inbound request goes through `RequestPipeline::run`: it is logged,
//! validated, and only then handed to its handler. Handlers are wired
//! explicitly (see `Services`); a request type is bound to its handler by the
//! `RequestHandler<R>` impl, not discovered at runtime.

use std::fmt;

use async_trait::async_trait;

use super::validation::Validate;
use crate::domain::errors::FootballResult;

/// A command or query with a typed response
pub trait Request: Validate + fmt::Debug + Send + Sync + 'static {
    type Response: Send + 'static;

    /// Name used in logs
    const NAME: &'static str;
}

/// Executes one request type
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    async fn handle(&self, request: R) -> FootballResult<R::Response>;
}

/// Validates a request, then dispatches it to a handler
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestPipeline;

impl RequestPipeline {
    pub fn new() -> Self {
        Self
    }

    pub async fn run<R, H>(&self, handler: &H, request: R) -> FootballResult<R::Response>
    where
        R: Request,
        H: RequestHandler<R> + ?Sized,
    {
        tracing::info!(request = R::NAME, payload = ?request, "Processing request");

        if let Err(err) = request.validate() {
            tracing::warn!(request = R::NAME, error = ?err, "Validation failed");
            return Err(err);
        }

        let result = handler.handle(request).await;

        match &result {
            Ok(_) => tracing::info!(request = R::NAME, "Finished processing request"),
            Err(err) => {
                tracing::info!(request = R::NAME, error = %err, "Request finished with error")
            }
        }

        result
    }
}
