use std::sync::Arc;

use axum::Form;
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use shikayat_core::models::{ComplaintFilter, DEFAULT_STATUS};
use shikayat_core::repositories::ComplaintRepository;
use tracing::{info, warn};

use crate::error::AppError;
use crate::session::{self, AdminFlag};
use crate::state::AppState;
use crate::views;

use super::{
    FlashParams, MSG_ADMIN_REQUIRED, MSG_BAD_PASSWORD, MSG_LOGGED_IN, MSG_LOGGED_OUT,
    redirect_flash,
};

#[derive(Debug, Deserialize, Default)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateForm {
    #[serde(default)]
    pub status: String,
}

/// GET /admin/login
pub async fn login_form(Query(flash): Query<FlashParams>) -> Html<String> {
    Html(views::login_page(flash.msg.as_deref(), flash.kind.as_deref()))
}

/// POST /admin/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Response {
    if state.gate.verify(&form.password) {
        info!("Admin logged in");
        let cookie = session::admin_cookie(&state.signer.issue_admin());
        (
            [(header::SET_COOKIE, cookie)],
            redirect_flash("/admin", "success", MSG_LOGGED_IN),
        )
            .into_response()
    } else {
        warn!("Failed admin login attempt");
        Html(views::login_page(Some(MSG_BAD_PASSWORD), Some("error"))).into_response()
    }
}

/// GET /admin/logout
pub async fn logout() -> Response {
    info!("Admin logged out");
    (
        [(header::SET_COOKIE, session::clear_cookie())],
        redirect_flash("/", "info", MSG_LOGGED_OUT),
    )
        .into_response()
}

/// GET /admin
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    AdminFlag(is_admin): AdminFlag,
    Query(flash): Query<FlashParams>,
) -> Result<Response, AppError> {
    if !is_admin {
        return Ok(
            redirect_flash("/admin/login", "error", MSG_ADMIN_REQUIRED).into_response()
        );
    }
    let complaints = state.repo.list(&ComplaintFilter::default()).await?;
    Ok(Html(views::dashboard_page(
        &complaints,
        flash.msg.as_deref(),
        flash.kind.as_deref(),
    ))
    .into_response())
}

/// POST /admin/update/{id}
pub async fn update(
    State(state): State<Arc<AppState>>,
    AdminFlag(is_admin): AdminFlag,
    Path(id): Path<i64>,
    Form(form): Form<UpdateForm>,
) -> Result<Response, AppError> {
    if !is_admin {
        return Ok(
            redirect_flash("/admin/login", "error", MSG_ADMIN_REQUIRED).into_response()
        );
    }

    let status = form.status.trim();
    let status = if status.is_empty() { DEFAULT_STATUS } else { status };

    let updated = state.repo.update_status(id, status).await?;
    info!("Complaint {} status set to {}", updated.id, updated.status);
    Ok(redirect_flash(
        "/admin",
        "success",
        &format!("Status updated to {}", updated.status),
    )
    .into_response())
}
