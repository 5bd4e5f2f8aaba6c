use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::AppState;
use crate::error::AppError;
use crate::handlers::auth::SessionUser;
use crate::utils::money::{format_grouped, parse_amount};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub receiver_name: String,
    pub receiver_account: String,
    pub bank: String,
    /// String or number; form clients send strings.
    pub amount: Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResponse {
    pub message: &'static str,
    #[serde(with = "rust_decimal::serde::float")]
    pub new_balance: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct WireRequest {
    pub phone: String,
    pub amount: Value,
}

#[derive(Serialize)]
pub struct WireResponse {
    pub message: String,
}

/// POST /transfer — debit the authenticated sender. The receiver fields
/// are recorded as free text; no stored account is credited. Check
/// order: sender lookup, amount parse, first-transfer minimum,
/// sufficient funds.
pub async fn transfer(
    State(state): State<AppState>,
    user: SessionUser,
    Json(req): Json<TransferRequest>,
) -> Result<Json<TransferResponse>, AppError> {
    let new_balance = state
        .store
        .mutate(|accounts| {
            let sender = accounts
                .iter_mut()
                .find(|a| a.phone == user.phone)
                .ok_or(AppError::AccountNotFound)?;
            let amount = parse_amount(&req.amount).ok_or(AppError::InvalidAmount)?;
            sender
                .transfer_out(amount, &req.receiver_name, &req.bank, &req.receiver_account)
                .map_err(AppError::from)
        })
        .await?;

    tracing::info!(phone = %user.phone, "transfer applied");

    Ok(Json(TransferResponse {
        message: "Transfer successful",
        new_balance,
    }))
}

/// POST /wire — credit an account by phone number. Deliberately
/// unauthenticated for compatibility with existing clients; flagged in
/// DESIGN.md. The account lookup runs before amount validation, so an
/// unknown phone reports "User not found" whatever the amount.
pub async fn wire(
    State(state): State<AppState>,
    Json(req): Json<WireRequest>,
) -> Result<Json<WireResponse>, AppError> {
    let amount = state
        .store
        .mutate(|accounts| {
            let account = accounts
                .iter_mut()
                .find(|a| a.phone == req.phone)
                .ok_or(AppError::AccountNotFound)?;
            let amount = parse_amount(&req.amount).ok_or(AppError::InvalidAmount)?;
            account.wire_in(amount).map_err(AppError::from)?;
            Ok(amount)
        })
        .await?;

    tracing::info!(phone = %req.phone, "wire deposit applied");

    Ok(Json(WireResponse {
        message: format!("₦{} credited to {}", format_grouped(amount), req.phone),
    }))
}
