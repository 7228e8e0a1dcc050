use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc::channel,
        Arc,
    },
    time::Duration,
};

use actix_web::{dev::ServerHandle, http::StatusCode as ServerStatusCode, web, App, HttpResponse, HttpServer};
use log::*;
use order_api::{config::OrderApiConfig, server::create_server_instance};
use order_flow::remote::{RemoteInventoryService, RemoteUserService};
use reqwest::{Client, Method, RequestBuilder, StatusCode};

/// Scripted behaviour for a fake upstream service: every request to the scripted route gets this
/// status and body, after an optional delay.
#[derive(Clone, Debug)]
pub struct UpstreamScript {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl UpstreamScript {
    pub fn ok<S: Into<String>>(body: S) -> Self {
        Self { status: 200, body: body.into(), delay: Duration::ZERO }
    }

    pub fn error(status: u16) -> Self {
        Self { status, body: r#"{"error":"upstream failure"}"#.to_string(), delay: Duration::ZERO }
    }

    pub fn delayed(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }
}

struct FakeState {
    hits: Arc<AtomicUsize>,
    script: UpstreamScript,
}

/// An in-process HTTP server standing in for one upstream service.
///
/// Only the scripted route is registered, so a request to a mistyped path comes back as a 404
/// and does not count as a hit.
pub struct FakeUpstream {
    url: String,
    hits: Arc<AtomicUsize>,
    _handle: ServerHandle,
}

impl FakeUpstream {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The number of requests that have hit the scripted route so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub async fn spawn_fake_user_service(script: UpstreamScript) -> FakeUpstream {
    spawn_fake("user-service", "/users/{user_id}/credit", script).await
}

pub async fn spawn_fake_inventory_service(script: UpstreamScript) -> FakeUpstream {
    spawn_fake("inventory-service", "/inventory/{item_id}/check", script).await
}

// `HttpServer` is not `Send`; only the `Server` returned by `run()` moves into the spawned task.
async fn spawn_fake(name: &'static str, route_path: &'static str, script: UpstreamScript) -> FakeUpstream {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let server = HttpServer::new(move || {
        let state = web::Data::new(FakeState { hits: counter.clone(), script: script.clone() });
        App::new().app_data(state).route(route_path, web::get().to(fake_responder))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("Error binding fake upstream service");
    let addr = server.addrs()[0];
    let srv = server.run();
    let handle = srv.handle();
    tokio::spawn(async move {
        match srv.await {
            Ok(_) => info!("🌍️ Fake {name} shut down"),
            Err(e) => warn!("🌍️ Fake {name} error: {e}"),
        }
    });
    let url = format!("http://{addr}");
    info!("🌍️ Fake {name} listening on {url}");
    FakeUpstream { url, hits, _handle: handle }
}

async fn fake_responder(state: web::Data<FakeState>) -> HttpResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    if !state.script.delay.is_zero() {
        tokio::time::sleep(state.script.delay).await;
    }
    let status = ServerStatusCode::from_u16(state.script.status).expect("Script used an invalid HTTP status");
    HttpResponse::build(status).content_type("application/json").body(state.script.body.clone())
}

/// A running order API server plus the client helpers for talking to it.
pub struct OrderApiHandle {
    pub config: OrderApiConfig,
    handle: ServerHandle,
}

pub async fn spawn_order_api(
    user_service_url: &str,
    inventory_service_url: &str,
    timeout: Duration,
) -> OrderApiHandle {
    let config = OrderApiConfig {
        host: "127.0.0.1".into(),
        port: 20000 + rand::random::<u16>() % 10_000,
        user_service_url: user_service_url.to_string(),
        inventory_service_url: inventory_service_url.to_string(),
        upstream_timeout: timeout,
    };
    let user_service = RemoteUserService::new(&config.user_service_url, config.upstream_timeout)
        .expect("Error creating the user service client");
    let inventory = RemoteInventoryService::new(&config.inventory_service_url, config.upstream_timeout)
        .expect("Error creating the inventory service client");
    info!("🌍️ Starting the order API on {}:{}", config.host, config.port);
    let server_config = config.clone();
    let (tx, rx) = channel();
    tokio::spawn(async move {
        let srv =
            create_server_instance(server_config, user_service, inventory).expect("Error creating server instance");
        let _res = tx.send(srv.handle());
        match srv.await {
            Ok(_) => info!("🌍️ Order API shut down"),
            Err(e) => warn!("🌍️ Order API error: {e}"),
        }
    });
    let handle = rx.recv().unwrap();
    info!("🌍️ Order API started");
    OrderApiHandle { config, handle }
}

impl OrderApiHandle {
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.request(Method::GET, path, |req| req).await
    }

    pub async fn post_order(&self, body: &str) -> (StatusCode, String) {
        let body = body.to_string();
        self.request(Method::POST, "/api/orders", |req| req.header("Content-Type", "application/json").body(body))
            .await
    }

    pub async fn request<F>(&self, method: Method, path: &str, req: F) -> (StatusCode, String)
    where F: FnOnce(RequestBuilder) -> RequestBuilder {
        let url = format!("http://{}:{}{path}", self.config.host, self.config.port);
        debug!("🌍️ Querying {url}");
        let client = Client::new();
        let request = req(client.request(method, url));
        let res = request.send().await.expect("Error getting response");
        let code = res.status();
        let body = res.text().await.expect("Error parsing response body");
        (code, body)
    }

    pub async fn stop(&self) {
        self.handle.stop(true).await;
    }
}
