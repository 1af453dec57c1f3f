/// Social API Library
///
/// Follow graph, posts/comments/likes, synchronous notification fan-out and
/// the followees feed for the social platform. Identity lives in a separate
/// auth service; this crate validates its bearer tokens and trusts `sub`.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route registration
/// - `domain`: Entity models and request/response payloads
/// - `services`: Business rules and transaction composition
/// - `repository`: Database access layer
/// - `middleware`: JWT authentication and ownership checks
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Observability and metrics collection
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod repository;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
