use dotenvy::dotenv;
use inventory_service::{config::InventoryConfig, server::run_server};
use log::info;

#[actix_web::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let config = InventoryConfig::from_env_or_default();

    info!("🚀️ Starting the inventory service on {}:{}", config.host, config.port);
    match run_server(config).await {
        Ok(_) => println!("Bye!"),
        Err(e) => eprintln!("{e}"),
    }
}
