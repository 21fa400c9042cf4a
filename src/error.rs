use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::orders::StoreError;

/// The demo rejects nothing on purpose, so the only runtime error is the
/// order store's lock going bad.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Order store unavailable")]
    StoreUnavailable(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::StoreUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
