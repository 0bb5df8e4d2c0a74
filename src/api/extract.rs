//! Request extractors with API-shaped rejections.

use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that maps every body failure to a 400 response in
/// the standard error envelope.
///
/// Axum's stock [`Json`] extractor rejects deserialization failures with
/// 422; this API reports malformed bodies as plain bad requests.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
