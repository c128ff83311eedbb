use axum::{
    async_trait,
    extract::{FromRequest, Json as AxumJson, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A wrapper around [`axum::extract::Json`] that rejects with an [`AppError`],
/// so malformed bodies get the same `{"error": ...}` shape as every other failure.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(AppJson(value)),
            Err(rejection) => {
                tracing::warn!(rejection = %rejection.body_text(), "Rejected request body");
                Err(rejection.into())
            }
        }
    }
}
