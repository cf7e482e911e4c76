use std::sync::Arc;

use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::runner::ProgramRunner;
use super::types::{PredictionRequest, PredictionResult};
use crate::error::ErrorBody;

pub struct PredictState {
    pub runner: Arc<dyn ProgramRunner>,
    /// First argument handed to the program, ahead of the JSON payload.
    pub script: String,
}

#[post("/predict")]
pub async fn predict(
    state: web::Data<PredictState>,
    body: web::Json<PredictionRequest>,
) -> impl Responder {
    let request_id = Uuid::new_v4();

    let payload = match serde_json::to_string(&*body) {
        Ok(payload) => payload,
        Err(source) => {
            error!(%request_id, error = %source, "could not serialize the symptom payload");
            return HttpResponse::InternalServerError()
                .json(ErrorBody::with_details("Prediction error", source.to_string()));
        }
    };

    info!(%request_id, "prediction request received");
    let args = vec![state.script.clone(), payload];

    match state.runner.invoke(&args).await {
        Ok(outcome) if outcome.success() => HttpResponse::Ok().json(PredictionResult {
            disease: outcome.stdout.trim().to_string(),
        }),
        Ok(outcome) => {
            error!(
                %request_id,
                exit_code = ?outcome.exit_code,
                stderr = %outcome.stderr,
                "prediction process exited with failure"
            );
            HttpResponse::InternalServerError()
                .json(ErrorBody::with_details("Prediction error", outcome.stderr))
        }
        Err(source) => {
            error!(%request_id, error = %source, "failed to start prediction process");
            HttpResponse::InternalServerError()
                .json(ErrorBody::new("Failed to start prediction process"))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(predict);
}
