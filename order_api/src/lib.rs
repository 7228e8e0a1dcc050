//! # Order API server
//! This crate hosts the public-facing order API. It is responsible for:
//! Accepting new order requests from clients.
//! Running each order through the credit and stock checks via [`order_flow`].
//! Translating the resulting decision (or failure) into the documented HTTP responses.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/api/orders`: The POST route for placing a new order.

pub mod config;
pub mod data_objects;
pub mod errors;
pub mod routes;
pub mod server;
