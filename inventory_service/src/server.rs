use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};

use crate::{
    api::InventoryApi,
    config::InventoryConfig,
    db::PgInventoryDb,
    errors::InventoryServerError,
    routes::{health, CheckStockRoute},
    traits::StockStore,
};

pub async fn run_server(config: InventoryConfig) -> Result<(), InventoryServerError> {
    let db = PgInventoryDb::connect(&config.database)
        .await
        .map_err(|e| InventoryServerError::InitializeError(e.to_string()))?;
    db.run_migrations().await.map_err(|e| InventoryServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, db)?;
    srv.await.map_err(|e| InventoryServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance<S>(config: InventoryConfig, store: S) -> Result<Server, InventoryServerError>
where S: StockStore + Clone + Send + 'static
{
    let srv = HttpServer::new(move || {
        let inventory_api = InventoryApi::new(store.clone());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("inventory_service::access_log"))
            .app_data(web::Data::new(inventory_api))
            .service(health)
            .service(CheckStockRoute::<S>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
