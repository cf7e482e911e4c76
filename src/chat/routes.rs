use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use super::client::ChatClient;
use super::prompt::FALLBACK_REPLY;

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

#[post("/chat")]
pub async fn chat(client: web::Data<ChatClient>, body: web::Json<ChatRequest>) -> impl Responder {
    let request_id = Uuid::new_v4();

    match client.generate(&body.message).await {
        Ok(reply) => HttpResponse::Ok().json(ChatReply { reply }),
        Err(source) => {
            error!(%request_id, error = %source, "generative API call failed");
            // The widget renders this as a normal bot turn, so stay 200.
            HttpResponse::Ok().json(ChatReply {
                reply: FALLBACK_REPLY.to_string(),
            })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(chat);
}
