use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use log::info;
use order_flow::{
    remote::{RemoteInventoryService, RemoteUserService},
    CreditCheck,
    OrderFlowApi,
    StockCheck,
};

use crate::{
    config::OrderApiConfig,
    errors::ServerError,
    routes::{health, CreateOrderRoute},
};

pub async fn run_server(config: OrderApiConfig) -> Result<(), ServerError> {
    let user_service = RemoteUserService::new(&config.user_service_url, config.upstream_timeout)
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let inventory = RemoteInventoryService::new(&config.inventory_service_url, config.upstream_timeout)
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, user_service, inventory)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance<C, S>(config: OrderApiConfig, user_service: C, inventory: S) -> Result<Server, ServerError>
where
    C: CreditCheck + Clone + Send + 'static,
    S: StockCheck + Clone + Send + 'static,
{
    info!(
        "💻️ Orders will be checked against the user service at {} and the inventory service at {}",
        config.user_service_url, config.inventory_service_url
    );
    let srv = HttpServer::new(move || {
        let orders_api = OrderFlowApi::new(user_service.clone(), inventory.clone());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("order_api::access_log"))
            .app_data(web::Data::new(orders_api))
            .service(health)
            .service(CreateOrderRoute::<C, S>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
