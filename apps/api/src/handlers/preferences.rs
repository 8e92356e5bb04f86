use axum::Json;
use axum::extract::{Extension, Path, State};
use hearth_core::SessionUser;
use hearth_domain::PreferenceKey;

use crate::dto::{PreferenceResponse, UpdatePreferenceRequest};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn get_preference_handler(
    State(state): State<AppState>,
    Extension(user): Extension<SessionUser>,
    Path(key): Path<String>,
) -> ApiResult<Json<PreferenceResponse>> {
    let key = key.parse::<PreferenceKey>()?;
    let value = state
        .preference_service
        .preference(user.subject(), key)
        .await?;

    Ok(Json(PreferenceResponse {
        key: key.as_str().to_owned(),
        value,
    }))
}

pub async fn update_preference_handler(
    State(state): State<AppState>,
    Extension(user): Extension<SessionUser>,
    Path(key): Path<String>,
    Json(payload): Json<UpdatePreferenceRequest>,
) -> ApiResult<Json<PreferenceResponse>> {
    let key = key.parse::<PreferenceKey>()?;
    let value = state
        .preference_service
        .update_preference(user.subject(), key, payload.value.as_str())
        .await?;

    Ok(Json(PreferenceResponse {
        key: key.as_str().to_owned(),
        value,
    }))
}
