//! Core types for FastFood Online.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod price;
pub mod role;
pub mod status;

pub use email::{Email, EmailError, normalize};
pub use id::*;
pub use price::{Price, PriceError};
pub use role::RoleName;
pub use status::ItemStatus;
