/**
 * Error Conversion
 *
 * `ChatError` implements `IntoResponse`, so handlers return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "success": false,
 *   "message": "Invalid credentials"
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::backend::error::types::ChatError;

/// JSON body of every failed request
#[derive(Debug, Serialize)]
pub struct FailureBody {
    pub success: bool,
    pub message: String,
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_server_error() {
            tracing::error!("Request failed ({}): {}", status, self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, self);
        }

        let body = FailureBody {
            success: false,
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}
