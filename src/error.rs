//! Error handling for request handlers.
//!
//! An unknown user is not an error; it renders the error page directly. Everything
//! here is an infrastructure failure and maps to a 500 page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Chart output error: {0}")]
    Chart(#[from] std::io::Error),
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Template(_) => "TEMPLATE_ERROR",
            AppError::Chart(_) => "CHART_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(code = self.code(), "Error: {:?}", self);

        let body = format!(
            "<!DOCTYPE html><html><head><title>Server error</title></head>\
             <body><h1>Something went wrong</h1><p>Error code: {}</p></body></html>",
            self.code()
        );
        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
