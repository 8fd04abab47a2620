//! Domain Layer - pure placement logic with no I/O
//!
//! This module contains the ring-placement core:
//! - Node identifiers and the address codec (format inference, checksums)
//! - XOR distance over the 160-bit identifier space
//! - The distance-ordered ring and its navigation queries

pub mod address;
pub mod entities;
pub mod errors;
pub mod ring;
pub mod services;
pub mod value_objects;

pub use address::*;
pub use entities::*;
pub use errors::*;
pub use ring::*;
pub use services::*;
pub use value_objects::*;
