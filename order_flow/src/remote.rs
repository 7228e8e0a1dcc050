//! Reqwest-backed implementations of the upstream service contracts.
//!
//! Both clients speak plain JSON over HTTP and carry a bounded request timeout, so a hung
//! upstream surfaces as [`UpstreamError::Timeout`] rather than stalling the caller forever.

use std::time::Duration;

use log::*;
use reqwest::Client;
use serde::de::DeserializeOwned;
use swiftorder_common::{CreditDecision, StockReport};

use crate::{
    errors::UpstreamError,
    traits::{CreditCheck, StockCheck},
};

/// Client for the user (credit) service.
#[derive(Clone)]
pub struct RemoteUserService {
    client: Client,
    base_url: String,
}

impl RemoteUserService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = build_client(timeout)?;
        Ok(Self { client, base_url: normalize_base_url(base_url) })
    }

    fn credit_url(&self, user_id: &str) -> String {
        format!("{}/users/{user_id}/credit", self.base_url)
    }
}

impl CreditCheck for RemoteUserService {
    async fn check_credit(&self, user_id: &str) -> Result<CreditDecision, UpstreamError> {
        let url = self.credit_url(user_id);
        trace!("🔄️📦️ Fetching credit decision: {url}");
        fetch_json(&self.client, &url).await
    }
}

/// Client for the inventory service.
#[derive(Clone)]
pub struct RemoteInventoryService {
    client: Client,
    base_url: String,
}

impl RemoteInventoryService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = build_client(timeout)?;
        Ok(Self { client, base_url: normalize_base_url(base_url) })
    }

    fn stock_url(&self, item_id: &str) -> String {
        format!("{}/inventory/{item_id}/check", self.base_url)
    }
}

impl StockCheck for RemoteInventoryService {
    async fn check_stock(&self, item_id: &str) -> Result<StockReport, UpstreamError> {
        let url = self.stock_url(item_id);
        trace!("🔄️📦️ Fetching stock report: {url}");
        fetch_json(&self.client, &url).await
    }
}

fn build_client(timeout: Duration) -> Result<Client, UpstreamError> {
    Client::builder().timeout(timeout).build().map_err(|e| UpstreamError::Initialization(e.to_string()))
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, UpstreamError> {
    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            UpstreamError::Timeout
        } else {
            UpstreamError::Unreachable(e.to_string())
        }
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::ErrorStatus(status.as_u16()));
    }
    trace!("🔄️📦️ Upstream query successful. {status}");
    response.json::<T>().await.map_err(|e| {
        if e.is_timeout() {
            UpstreamError::Timeout
        } else {
            UpstreamError::BadPayload(e.to_string())
        }
    })
}
