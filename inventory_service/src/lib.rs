//! # Inventory service
//! This crate hosts the stock-lookup microservice. It is responsible for:
//! Answering stock checks for a single item against the inventory database.
//! Reporting availability (`available` iff more than zero units on hand) without mutating stock.
//! Keeping "unknown item" (404) distinct from "known item, zero stock" (200).
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/inventory/{item_id}/check`: The GET route for checking the stock of one item.

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod routes;
pub mod server;
pub mod traits;

#[cfg(test)]
mod endpoint_tests;
