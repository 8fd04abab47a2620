//! Adapters for external integrations.
//!
//! Concrete, feature-gated implementations around the ports layer.

#[cfg(feature = "rpc")]
pub mod api_handler;

#[cfg(feature = "rpc")]
pub use api_handler::{ApiGatewayHandler, ApiQueryError, RpcMemberInfo, RpcRingInfo};
