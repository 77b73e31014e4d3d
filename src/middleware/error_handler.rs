use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::{JsonPayloadError, PathError, QueryPayloadError},
    Error, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::core::AppError;

/// Middleware logging every request that ends in an error
pub struct ErrorHandler;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorHandlerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let method = req.method().clone();
        let path = req.path().to_string();

        Box::pin(async move {
            let result = service.call(req).await;

            match &result {
                Err(err) => {
                    tracing::error!(method = %method, path = %path, error = ?err, "Request error");
                }
                Ok(res) => {
                    if let Some(err) = res.response().error() {
                        let status = res.status();
                        if status.is_server_error() {
                            tracing::error!(method = %method, path = %path, status = %status, error = %err, "Request failed");
                        } else {
                            tracing::warn!(method = %method, path = %path, status = %status, error = %err, "Request rejected");
                        }
                    }
                }
            }

            result
        })
    }
}

/// Turn malformed JSON bodies into the standard error body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    AppError::validation(format!("Malformed request body: {}", err)).into()
}

/// Turn unparsable query strings (for example a missing customerId) into the standard error body
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    AppError::validation(format!("Invalid query string: {}", err)).into()
}

/// Turn unparsable path segments (for example a malformed credit code) into the standard error body
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> Error {
    AppError::validation(format!("Invalid path parameter: {}", err)).into()
}
