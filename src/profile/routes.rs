use std::sync::Arc;

use actix_web::{get, put, web, HttpResponse};
use tracing::info;

use super::store::ProfileStore;
use super::types::MedicalProfile;
use crate::error::ApiError;

pub struct ProfileState {
    pub store: Arc<dyn ProfileStore>,
}

#[get("/profile/{uid}")]
pub async fn fetch_profile(
    state: web::Data<ProfileState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let uid = path.into_inner();
    match state.store.fetch(&uid).await? {
        Some(profile) => Ok(HttpResponse::Ok().json(profile)),
        None => Err(ApiError::ProfileNotFound { uid }),
    }
}

#[put("/profile/{uid}")]
pub async fn save_profile(
    state: web::Data<ProfileState>,
    path: web::Path<String>,
    body: web::Json<MedicalProfile>,
) -> Result<HttpResponse, ApiError> {
    let uid = path.into_inner();
    let mut profile = body.into_inner();
    profile.touch();
    state.store.save(&uid, &profile).await?;
    info!(%uid, "medical profile saved");
    Ok(HttpResponse::Ok().json(profile))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(fetch_profile).service(save_profile);
}
