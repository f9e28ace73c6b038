use crate::error::AppError;
use axum::extract::FromRequest;

/// `Json` extractor whose rejections use the gateway's error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
