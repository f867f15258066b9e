//! GitHub REST API integration.

/// Issue creation endpoint.
pub mod issues;
