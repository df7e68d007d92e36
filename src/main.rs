use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use training_tracker::config::{Backend, Config};
use training_tracker::handlers;
use training_tracker::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|err| {
        error!("{}", err);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
    })?;
    if config.backend == Backend::Memory {
        info!("Using the in-memory table store; data is lost on restart");
    }

    let bind_addr = config.bind_addr.clone();
    let state = AppState::connect(config).await.map_err(|err| {
        error!("Failed to connect to the database - {}", err);
        std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
    })?;
    let state = web::Data::new(state);

    info!("Starting server at {}", bind_addr);

    HttpServer::new(move || App::new().app_data(state.clone()).configure(handlers::routes))
        .bind(bind_addr)?
        .run()
        .await
}
