//! HTTP client for the shortener API.

pub mod dto;
pub mod gateway;

pub use gateway::HttpApiGateway;
