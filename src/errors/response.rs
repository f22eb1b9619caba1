use std::any::Any;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use crate::errors::AppError;

// Body returned for every failed request.
#[derive(Serialize)]
pub struct FailureEnvelope {
    pub success: bool,
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            // Keep axum's own status for malformed or incomplete forms
            AppError::Form(rejection) => rejection.status(),
            AppError::Template(_) | AppError::Serialize(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match &self {
            AppError::Form(rejection) => rejection.body_text(),
            other => other.to_string(),
        };

        tracing::error!("Request failed with {}: {}", status, error);

        let body = FailureEnvelope {
            success: false,
            error,
        };
        (status, Json(body)).into_response()
    }
}

/// Turns a caught handler panic into the usual failure envelope.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(message).into_response()
}
