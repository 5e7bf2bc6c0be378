//! FastFood Online Core - Shared domain types.
//!
//! This crate provides the types shared by the FastFood Online components:
//! - `seed` - Database seeding (roles, administrator, sample catalog)
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access. The
//! optional `postgres` feature adds `sqlx` encode/decode implementations so
//! the same types can be bound to queries directly.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, emails, prices, item statuses and role names

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
