use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::domain::{Account, Transaction};
use crate::error::AppError;
use crate::handlers::auth::SessionUser;
use crate::session::SESSION_COOKIE;

const DASHBOARD_REDIRECT: &str = "/dashboard.html";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub phone: String,
    pub pin: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub phone: String,
    pub pin: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub redirect: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub full_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

#[derive(Serialize)]
pub struct BalanceResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .build()
}

/// POST /register — create an account, grant the signup bonus, and log
/// the new user in. The duplicate check runs inside the store mutation
/// so a racing registration cannot slip between check and insert.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    state
        .store
        .mutate(|accounts| {
            if accounts.iter().any(|a| a.phone == req.phone) {
                return Err(AppError::DuplicatePhone);
            }
            accounts.push(Account::new(
                req.full_name.clone(),
                req.phone.clone(),
                req.pin.clone(),
            ));
            Ok(())
        })
        .await?;

    tracing::info!(phone = %req.phone, "account registered");

    let token = state.sessions.create(&req.phone).await;
    Ok((
        jar.add(session_cookie(token)),
        Json(AuthResponse {
            message: "Registration successful!",
            redirect: DASHBOARD_REDIRECT,
        }),
    ))
}

/// POST /login — phone + PIN by plain equality.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let accounts = state.store.read().await?;
    let account = accounts
        .iter()
        .find(|a| a.phone == req.phone && a.pin_matches(&req.pin))
        .ok_or(AppError::InvalidCredentials)?;

    let token = state.sessions.create(&account.phone).await;
    Ok((
        jar.add(session_cookie(token)),
        Json(AuthResponse {
            message: "Login successful",
            redirect: DASHBOARD_REDIRECT,
        }),
    ))
}

/// GET /dashboard — name and balance for the logged-in account.
pub async fn dashboard(
    State(state): State<AppState>,
    user: SessionUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let account = find_account(&state, &user.phone).await?;
    Ok(Json(ProfileResponse {
        full_name: account.full_name,
        balance: account.balance,
    }))
}

/// GET /balance
pub async fn balance(
    State(state): State<AppState>,
    user: SessionUser,
) -> Result<Json<BalanceResponse>, AppError> {
    let account = find_account(&state, &user.phone).await?;
    Ok(Json(BalanceResponse {
        balance: account.balance,
    }))
}

/// GET /history — the full transaction list, oldest first, as a bare
/// array.
pub async fn history(
    State(state): State<AppState>,
    user: SessionUser,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let account = find_account(&state, &user.phone).await?;
    Ok(Json(account.transactions))
}

/// POST /logout — revoke the session and clear the cookie. Succeeds
/// whether or not a session was present.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.revoke(cookie.value()).await;
    }
    let mut removal = Cookie::from(SESSION_COOKIE);
    removal.set_path("/");
    (
        jar.remove(removal),
        Json(serde_json::json!({ "message": "Logged out successfully" })),
    )
}

async fn find_account(state: &AppState, phone: &str) -> Result<Account, AppError> {
    let accounts = state.store.read().await?;
    accounts
        .into_iter()
        .find(|a| a.phone == phone)
        .ok_or(AppError::AccountNotFound)
}
