use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::domain::LedgerError;
use crate::store::StoreError;

/// Where clients are pointed when a transfer fails for lack of funds.
const DEPOSIT_REDIRECT: &str = "/dashboard.html";

/// Every failure the API reports. Display strings are the wire-visible
/// `message` values clients depend on.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Phone number already registered")]
    DuplicatePhone,

    #[error("Invalid phone or PIN")]
    InvalidCredentials,

    #[error("Unauthorized. Please log in.")]
    Unauthorized,

    #[error("User not found")]
    AccountNotFound,

    #[error("First transfer must be at least ₦100,000")]
    MinimumFirstTransfer,

    #[error("Insufficient funds! Kindly deposit to your account from your dashboard.")]
    InsufficientFunds,

    #[error("Invalid deposit amount")]
    InvalidAmount,

    #[error("Account store unavailable")]
    Storage(#[from] StoreError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DuplicatePhone
            | AppError::InvalidCredentials
            | AppError::AccountNotFound
            | AppError::MinimumFirstTransfer
            | AppError::InsufficientFunds
            | AppError::InvalidAmount => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::MinimumFirstTransfer => AppError::MinimumFirstTransfer,
            LedgerError::InsufficientFunds => AppError::InsufficientFunds,
            LedgerError::InvalidAmount => AppError::InvalidAmount,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Storage(cause) = &self {
            tracing::error!(error = %cause, "account store failure");
        }

        let status = self.status_code();
        let mut body = json!({ "message": self.to_string() });
        if matches!(self, AppError::InsufficientFunds) {
            body["depositRedirect"] = json!(DEPOSIT_REDIRECT);
        }

        (status, Json(body)).into_response()
    }
}
