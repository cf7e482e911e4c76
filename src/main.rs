mod chat;
mod config;
mod error;
mod predict;
mod profile;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chat::ChatClient;
use config::Config;
use predict::{CommandRunner, PredictState, ProgramRunner};
use profile::{FirestoreStore, MemoryStore, ProfileState, ProfileStore};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();

    let runner: Arc<dyn ProgramRunner> = Arc::new(CommandRunner::new(&config.predictor.program));
    let predict_state = web::Data::new(PredictState {
        runner,
        script: config.predictor.script.clone(),
    });

    let chat_client = web::Data::new(ChatClient::new(&config.chat)?);

    let store: Arc<dyn ProfileStore> = match &config.firestore {
        Some(firestore) => {
            info!(project = %firestore.project, "using the Firestore profile store");
            Arc::new(FirestoreStore::new(firestore)?)
        }
        None => {
            info!("using the in-memory profile store");
            Arc::new(MemoryStore::new())
        }
    };
    let profile_state = web::Data::new(ProfileState { store });

    let port = config.port;
    info!(port, "server starting");

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(predict_state.clone())
            .app_data(chat_client.clone())
            .app_data(profile_state.clone())
            .configure(predict::routes::configure)
            .configure(chat::routes::configure)
            .configure(profile::routes::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    Ok(())
}
