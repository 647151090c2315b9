//! Public share handlers.

use axum::extract::{Path, Request, State};
use axum::response::Response;

use tunehub_core::error::AppError;
use tunehub_service::share::Disposition;

use crate::error::ApiError;
use crate::state::AppState;

/// GET {share_path}/{*id}: a UI asset or a public share
pub async fn handle_share(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> Result<Response, ApiError> {
    match state.share_service.classify(&id)? {
        Disposition::Asset => Ok(state.assets.serve(&id, request).await),
        Disposition::ShareCandidate(id) => {
            let share = state.share_service.open_share(&id).await?;
            Ok(state.renderer.render(&share).await?)
        }
    }
}

/// GET {share_path} and {share_path}/: no share id given
pub async fn missing_share_id() -> ApiError {
    ApiError(AppError::validation("invalid id"))
}
