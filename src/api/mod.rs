//! Client side of the prime search HTTP API.
//!
//! Both endpoints share one request shape (form body `n=<value>`) and one
//! reply shape (JSON with a `status` discriminator), so a single
//! [`ApiClient::fetch`] serves both.

pub mod client;
pub mod endpoint;
pub mod response;

pub use client::{ApiClient, encode_body};
pub use endpoint::Endpoint;
pub use response::{ApiResponse, Outcome, STATUS_OK};
