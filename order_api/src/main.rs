use dotenvy::dotenv;
use log::info;
use order_api::{config::OrderApiConfig, server::run_server};

#[actix_web::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let config = OrderApiConfig::from_env_or_default();

    info!("🚀️ Starting the order API on {}:{}", config.host, config.port);
    match run_server(config).await {
        Ok(_) => println!("Bye!"),
        Err(e) => eprintln!("{e}"),
    }
}
