use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;
use shikayat_core::models::ComplaintFilter;
use shikayat_core::repositories::ComplaintRepository;

use crate::error::AppError;
use crate::session::AdminFlag;
use crate::state::AppState;
use crate::views;

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
    pub q: Option<String>,
    pub status: Option<String>,
    pub role: Option<String>,
    pub msg: Option<String>,
    pub kind: Option<String>,
}

/// GET /complaints
pub async fn list(
    State(state): State<Arc<AppState>>,
    AdminFlag(is_admin): AdminFlag,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, AppError> {
    let filter = ComplaintFilter::from_params(params.q, params.status, params.role);
    let complaints = state.repo.list(&filter).await?;
    Ok(Html(views::listing_page(
        &complaints,
        &filter,
        is_admin,
        params.msg.as_deref(),
        params.kind.as_deref(),
    )))
}
