use std::sync::Arc;

use axum::Form;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use shikayat_core::Error;
use shikayat_core::models::NewComplaint;
use shikayat_core::repositories::ComplaintRepository;
use tracing::{debug, info};

use crate::error::AppError;
use crate::state::AppState;
use crate::views;

use super::{FlashParams, MSG_FIELDS_REQUIRED, MSG_SUBMITTED, redirect_flash};

#[derive(Debug, Deserialize, Default)]
pub struct SubmitForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
}

/// GET /submit
pub async fn show(Query(flash): Query<FlashParams>) -> Html<String> {
    Html(views::submit_page(flash.msg.as_deref(), flash.kind.as_deref()))
}

/// POST /submit
pub async fn create(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SubmitForm>,
) -> Result<Response, AppError> {
    let new = match NewComplaint::new(
        &form.name,
        &form.email,
        &form.role,
        &form.title,
        &form.description,
        Some(&form.category),
        Some(&form.location),
    ) {
        Ok(n) => n,
        Err(Error::Validation(reason)) => {
            debug!("Rejected submission: {reason}");
            return Ok(
                redirect_flash("/submit", "error", MSG_FIELDS_REQUIRED).into_response()
            );
        }
        Err(e) => return Err(e.into()),
    };

    let created = state.repo.insert(&new).await?;
    info!("Complaint {} submitted by {}", created.id, created.name);
    Ok(redirect_flash("/complaints", "success", MSG_SUBMITTED).into_response())
}
