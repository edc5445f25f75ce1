//! Gateway traits: the seam between application logic and the HTTP client.

pub mod analytics_gateway;
pub mod auth_gateway;
pub mod link_gateway;
pub mod profile_gateway;

pub use analytics_gateway::AnalyticsGateway;
pub use auth_gateway::AuthGateway;
pub use link_gateway::LinkGateway;
pub use profile_gateway::ProfileGateway;

#[cfg(test)]
pub use analytics_gateway::MockAnalyticsGateway;
#[cfg(test)]
pub use auth_gateway::MockAuthGateway;
#[cfg(test)]
pub use link_gateway::MockLinkGateway;
#[cfg(test)]
pub use profile_gateway::MockProfileGateway;
