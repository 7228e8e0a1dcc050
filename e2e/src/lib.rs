//! End-to-end test support for the order system.
//!
//! The harness in [`helpers`] runs everything in a single process: scriptable fake upstream
//! services with hit counters, and a real order API server wired to them over HTTP.

pub mod helpers;
