//! # API Gateway Request Handler
//!
//! JSON views of the placement ring for admin/debug RPC endpoints.
//!
//! ## Supported Methods
//!
//! - `get_ring_info` - Returns the local node and full ring ordering
//! - `get_closest` - Returns the members responsible for a lookup key

use crate::domain::PlacementError;
use crate::ports::PlacementApi;
use serde::{Deserialize, Serialize};

/// Ring member formatted for JSON-RPC responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcMemberInfo {
    /// Original address string as registered
    pub address: String,
    /// Canonical proxy identifier
    #[serde(rename = "proxyId")]
    pub proxy_id: String,
}

/// Ring overview for admin responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRingInfo {
    /// Local node address
    #[serde(rename = "localAddress")]
    pub local_address: String,
    /// Local node proxy identifier
    #[serde(rename = "localProxyId")]
    pub local_proxy_id: String,
    /// Ring size
    pub size: usize,
    /// Full ascending-distance ordering
    pub order: Vec<RpcMemberInfo>,
}

/// Errors surfaced to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiQueryError {
    /// Underlying placement failure, already formatted
    Placement(String),
}

impl From<PlacementError> for ApiQueryError {
    fn from(err: PlacementError) -> Self {
        Self::Placement(err.to_string())
    }
}

/// API gateway handler over any [`PlacementApi`] implementation.
pub struct ApiGatewayHandler<S> {
    service: S,
}

impl<S: PlacementApi> ApiGatewayHandler<S> {
    /// Create a new API handler.
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Ring overview for `get_ring_info`.
    pub fn get_ring_info(&self) -> Result<RpcRingInfo, ApiQueryError> {
        let local_address = self.service.local_address();
        let local_proxy_id = self
            .service
            .decode(&local_address)
            .map(|id| self.service.encode_proxy(&id))?;

        let order = self
            .service
            .order()
            .into_iter()
            .map(|address| {
                let id = self.service.decode(&address)?;
                Ok(RpcMemberInfo {
                    proxy_id: self.service.encode_proxy(&id),
                    address,
                })
            })
            .collect::<Result<Vec<_>, PlacementError>>()?;

        Ok(RpcRingInfo {
            local_address,
            local_proxy_id,
            size: order.len(),
            order,
        })
    }

    /// Responsible members for a lookup key, for `get_closest`.
    pub fn get_closest(&self, key: &str, n: usize) -> Result<Vec<String>, ApiQueryError> {
        Ok(self.service.closest(key, n)?)
    }
}
