//! Auth Endpoints
//!
//! Login/logout, signup, profile and account recovery.

use serde::Serialize;
use serde_json::{json, Value};

use super::client::extract_access_token;
use super::{client, ApiRequest};
use crate::error::ApiResult;
use crate::models::{CodeSent, FoundId, OkResponse, SignupPayload, UpdateMePayload, User};

#[derive(Serialize)]
struct LoginArgs<'a> {
    id: &'a str,
    password: &'a str,
}

/// Log in and keep the returned access token
pub async fn login(id: &str, password: &str) -> ApiResult<()> {
    let api = client();
    let request = ApiRequest::post("/auth/login")
        .json(&LoginArgs { id: id.trim(), password: password.trim() })?
        .anonymous();
    let body: Value = api.fetch(request).await?;
    if let Some(token) = extract_access_token(&body) {
        api.session().set_token(token);
    }
    log::info!("logged in as {}", id.trim());
    Ok(())
}

/// Log out; the local token is dropped even when the call fails
pub async fn logout() -> ApiResult<()> {
    let api = client();
    let result = api.execute(ApiRequest::post("/auth/logout")).await.map(|_| ());
    api.session().clear();
    result
}

pub async fn signup(payload: SignupPayload) -> ApiResult<()> {
    let request = ApiRequest::post("/auth/signup").json(&payload.normalized())?.anonymous();
    client().execute(request).await?;
    Ok(())
}

pub async fn me() -> ApiResult<User> {
    client().fetch(ApiRequest::get("/me")).await
}

/// Restore a session from the refresh cookie. Failures only mean "logged out".
pub async fn init() -> bool {
    match client().refresh_session().await {
        Ok(()) => true,
        Err(e) => {
            log::debug!("no session to restore: {}", e);
            false
        }
    }
}

pub async fn update_me(payload: &UpdateMePayload) -> ApiResult<User> {
    client().fetch(ApiRequest::put("/me").json(payload)?).await
}

pub async fn delete_me(password: &str, password_confirm: &str) -> ApiResult<()> {
    let api = client();
    let request = ApiRequest::delete("/me/delete")
        .json(&json!({ "password": password, "password_confirm": password_confirm }))?;
    api.execute(request).await?;
    api.session().clear();
    Ok(())
}

// ========================
// Account Recovery
// ========================

pub async fn send_find_id_code(email: &str, username: Option<&str>) -> ApiResult<CodeSent> {
    let username = username.map(str::trim).filter(|u| !u.is_empty());
    let request = ApiRequest::post("/auth/find-id")
        .json(&json!({ "email": email.trim(), "username": username }))?
        .anonymous();
    client().fetch(request).await
}

pub async fn verify_find_id_code(email: &str, code: &str) -> ApiResult<FoundId> {
    let request = ApiRequest::post("/auth/find-id/verify")
        .json(&json!({ "email": email.trim(), "code": code.trim() }))?
        .anonymous();
    client().fetch(request).await
}

pub async fn send_find_password_code(id: &str, email: &str) -> ApiResult<CodeSent> {
    let request = ApiRequest::post("/auth/find-password")
        .json(&json!({ "id": id.trim(), "email": email.trim() }))?
        .anonymous();
    client().fetch(request).await
}

pub async fn set_new_password(id: &str, email: &str, code: &str, new_password: &str) -> ApiResult<OkResponse> {
    let request = ApiRequest::put("/auth/password-set")
        .json(&json!({
            "id": id.trim(),
            "email": email.trim(),
            "code": code.trim(),
            "new_password": new_password.trim(),
        }))?
        .anonymous();
    client().fetch(request).await
}
