//! Header extractors identifying the caller of a reaction request.
//!
//! There is no authentication: the client names itself via `X-User-Id`.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use board_core::error::CoreError;
use board_core::reactions::validate_user_id;

use crate::error::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const IDEMPOTENCY_KEY_HEADER: &str = "idempotency-key";

/// Caller identity taken from the required `X-User-Id` header.
///
/// ```ignore
/// async fn my_handler(UserId(user_id): UserId) -> AppResult<Json<()>> {
///     tracing::info!(%user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct UserId(pub String);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .unwrap_or_default();

        validate_user_id(value).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
        Ok(UserId(value.to_string()))
    }
}

/// Optional `Idempotency-Key` header. Never rejects.
#[derive(Debug, Clone, Default)]
pub struct IdempotencyKey(pub Option<String>);

impl IdempotencyKey {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for IdempotencyKey
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let key = parts
            .headers
            .get(IDEMPOTENCY_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from);
        Ok(IdempotencyKey(key))
    }
}
