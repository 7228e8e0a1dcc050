use actix_web::{
    body::MessageBody,
    http::StatusCode,
    test,
    test::TestRequest,
    web,
    web::ServiceConfig,
    App,
};
use order_flow::{OrderFlowApi, UpstreamError};
use swiftorder_common::{CreditDecision, StockReport};

use super::helpers::post_request;
use crate::{
    endpoint_tests::mocks::{MockInventoryService, MockUserService},
    routes::{health, CreateOrderRoute},
};

const ORDER_BODY: &str = r#"{"userId":"alice","itemId":"widget-1"}"#;

const CONFIRMED_JSON: &str =
    r#"{"status":"order_confirmed","userId":"alice","itemId":"widget-1","checked_by_user_service":"v2-enhanced-db-check"}"#;

const INSUFFICIENT_CREDIT_JSON: &str =
    r#"{"status":"order_declined","reason":"insufficient_credit","user_service_version":"v1-standard-db-check"}"#;

const OUT_OF_STOCK_JSON: &str = r#"{"status":"order_declined","reason":"out_of_stock"}"#;

#[actix_web::test]
async fn health_endpoint() {
    let app = test::init_service(App::new().service(health)).await;
    let req = TestRequest::get().uri("/health").to_request();
    let (_req, res) = test::call_service(&app, req).await.into_parts();
    let status = res.status();
    let body = res.into_body().try_into_bytes().unwrap();
    assert!(status.is_success());
    assert_eq!(body, "👍️\n");
}

#[actix_web::test]
async fn place_order_happy_path() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_request("/api/orders", ORDER_BODY, configure_confirmed).await.expect("Request failed");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, CONFIRMED_JSON);
}

#[actix_web::test]
async fn place_order_with_extra_fields() {
    let _ = env_logger::try_init().ok();
    let body = r#"{"userId":"alice","itemId":"widget-1","note":"gift wrap please"}"#;
    let (status, body) = post_request("/api/orders", body, configure_confirmed).await.expect("Request failed");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, CONFIRMED_JSON);
}

#[actix_web::test]
async fn place_order_insufficient_credit() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_request("/api/orders", ORDER_BODY, configure_declined).await.expect("Request failed");
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(body, INSUFFICIENT_CREDIT_JSON);
}

#[actix_web::test]
async fn place_order_out_of_stock() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_request("/api/orders", ORDER_BODY, configure_out_of_stock).await.expect("Request failed");
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, OUT_OF_STOCK_JSON);
    assert!(!body.contains("user_service_version"));
}

#[actix_web::test]
async fn place_order_user_service_unreachable() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        post_request("/api/orders", ORDER_BODY, configure_user_service_down).await.expect("Request failed");
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, r#"{"error":"User service unavailable: could not reach the service: connection refused"}"#);
}

#[actix_web::test]
async fn place_order_user_service_times_out() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        post_request("/api/orders", ORDER_BODY, configure_user_service_timeout).await.expect("Request failed");
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, r#"{"error":"User service unavailable: the call did not complete within the configured timeout"}"#);
}

#[actix_web::test]
async fn place_order_user_service_answers_garbage() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        post_request("/api/orders", ORDER_BODY, configure_user_service_garbage).await.expect("Request failed");
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body,
        r#"{"error":"User service unavailable: the response body could not be interpreted: missing field status"}"#
    );
}

#[actix_web::test]
async fn place_order_inventory_errors_after_approval() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        post_request("/api/orders", ORDER_BODY, configure_inventory_down).await.expect("Request failed");
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, r#"{"error":"Inventory service unavailable: the service answered with HTTP 500"}"#);
}

#[actix_web::test]
async fn place_order_malformed_json() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        post_request("/api/orders", "this is not json", configure_untouched).await.expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Payload deserialization error"}"#);
}

#[actix_web::test]
async fn place_order_missing_item_id() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        post_request("/api/orders", r#"{"userId":"alice"}"#, configure_untouched).await.expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Missing userId or itemId"}"#);
}

#[actix_web::test]
async fn place_order_empty_user_id() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_request("/api/orders", r#"{"userId":"","itemId":"widget-1"}"#, configure_untouched)
        .await
        .expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Missing userId or itemId"}"#);
}

#[actix_web::test]
async fn identical_requests_get_identical_responses() {
    let _ = env_logger::try_init().ok();
    let mut user_service = MockUserService::new();
    user_service.expect_check_credit().times(2).returning(|_| Ok(CreditDecision::approved("v1")));
    let mut inventory = MockInventoryService::new();
    inventory.expect_check_stock().times(2).returning(|item_id| Ok(StockReport::new(item_id, 4)));
    let orders_api = OrderFlowApi::new(user_service, inventory);
    let app = App::new()
        .app_data(web::Data::new(orders_api))
        .service(CreateOrderRoute::<MockUserService, MockInventoryService>::new());
    let service = test::init_service(app).await;

    let mut bodies = Vec::with_capacity(2);
    for _ in 0..2 {
        let req = TestRequest::post()
            .uri("/api/orders")
            .insert_header(("content-type", "application/json"))
            .set_payload(ORDER_BODY)
            .to_request();
        let (_, res) = test::call_service(&service, req).await.into_parts();
        assert_eq!(res.status(), StatusCode::CREATED);
        bodies.push(res.into_body().try_into_bytes().unwrap());
    }
    assert_eq!(bodies[0], bodies[1]);
}

fn configure_confirmed(cfg: &mut ServiceConfig) {
    let mut user_service = MockUserService::new();
    user_service
        .expect_check_credit()
        .withf(|user_id| user_id == "alice")
        .times(1)
        .returning(|_| Ok(CreditDecision::approved("v2-enhanced-db-check")));
    let mut inventory = MockInventoryService::new();
    inventory
        .expect_check_stock()
        .withf(|item_id| item_id == "widget-1")
        .times(1)
        .returning(|item_id| Ok(StockReport::new(item_id, 5)));
    add_order_route(cfg, user_service, inventory);
}

fn configure_declined(cfg: &mut ServiceConfig) {
    let mut user_service = MockUserService::new();
    user_service.expect_check_credit().times(1).returning(|_| Ok(CreditDecision::declined("v1-standard-db-check")));
    // A declined user must never generate inventory traffic
    let mut inventory = MockInventoryService::new();
    inventory.expect_check_stock().times(0);
    add_order_route(cfg, user_service, inventory);
}

fn configure_out_of_stock(cfg: &mut ServiceConfig) {
    let mut user_service = MockUserService::new();
    user_service.expect_check_credit().times(1).returning(|_| Ok(CreditDecision::approved("v1-standard-db-check")));
    let mut inventory = MockInventoryService::new();
    inventory.expect_check_stock().times(1).returning(|item_id| Ok(StockReport::new(item_id, 0)));
    add_order_route(cfg, user_service, inventory);
}

fn configure_user_service_down(cfg: &mut ServiceConfig) {
    let mut user_service = MockUserService::new();
    user_service
        .expect_check_credit()
        .times(1)
        .returning(|_| Err(UpstreamError::Unreachable("connection refused".into())));
    let mut inventory = MockInventoryService::new();
    inventory.expect_check_stock().times(0);
    add_order_route(cfg, user_service, inventory);
}

fn configure_user_service_timeout(cfg: &mut ServiceConfig) {
    let mut user_service = MockUserService::new();
    user_service.expect_check_credit().times(1).returning(|_| Err(UpstreamError::Timeout));
    let mut inventory = MockInventoryService::new();
    inventory.expect_check_stock().times(0);
    add_order_route(cfg, user_service, inventory);
}

fn configure_user_service_garbage(cfg: &mut ServiceConfig) {
    let mut user_service = MockUserService::new();
    user_service
        .expect_check_credit()
        .times(1)
        .returning(|_| Err(UpstreamError::BadPayload("missing field status".into())));
    let mut inventory = MockInventoryService::new();
    inventory.expect_check_stock().times(0);
    add_order_route(cfg, user_service, inventory);
}

fn configure_inventory_down(cfg: &mut ServiceConfig) {
    let mut user_service = MockUserService::new();
    user_service.expect_check_credit().times(1).returning(|_| Ok(CreditDecision::approved("v1")));
    let mut inventory = MockInventoryService::new();
    inventory.expect_check_stock().times(1).returning(|_| Err(UpstreamError::ErrorStatus(500)));
    add_order_route(cfg, user_service, inventory);
}

// For requests that must be rejected before the decision flow starts
fn configure_untouched(cfg: &mut ServiceConfig) {
    let mut user_service = MockUserService::new();
    user_service.expect_check_credit().times(0);
    let mut inventory = MockInventoryService::new();
    inventory.expect_check_stock().times(0);
    add_order_route(cfg, user_service, inventory);
}

fn add_order_route(cfg: &mut ServiceConfig, user_service: MockUserService, inventory: MockInventoryService) {
    let orders_api = OrderFlowApi::new(user_service, inventory);
    cfg.service(CreateOrderRoute::<MockUserService, MockInventoryService>::new())
        .app_data(web::Data::new(orders_api));
}
