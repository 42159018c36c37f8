//! Leech management endpoints (admin only on the backend).

use uuid::Uuid;

use crate::api::models::{
    CreateLeechRequest, LeechesResponse, SimpleLeech, UpdateLeechRequest, UuidResponse,
};
use crate::api::{ApiResult, get_json, post_json, put_json};

/// Register a new leech and return its uuid.
pub async fn create(request: &CreateLeechRequest) -> ApiResult<Uuid> {
    let response: UuidResponse = post_json("/api/v1/leeches".to_owned(), request).await?;
    Ok(response.uuid)
}

/// Fetch all registered leeches.
pub async fn all() -> ApiResult<Vec<SimpleLeech>> {
    let response: LeechesResponse = get_json("/api/v1/leeches".to_owned(), vec![]).await?;
    Ok(response.leeches)
}

/// Update an existing leech. `None` fields are left unchanged.
pub async fn update(leech: Uuid, request: &UpdateLeechRequest) -> ApiResult<()> {
    put_json(format!("/api/v1/leeches/{leech}"), request).await
}

/// Unregister a leech.
pub async fn delete(leech: Uuid) -> ApiResult<()> {
    crate::api::delete(format!("/api/v1/leeches/{leech}")).await
}
