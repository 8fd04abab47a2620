//! Cross-crate integration flows.

pub mod placement_flow;
