//! Integration tests for the FastFood Online seeders.
//!
//! # Running Tests
//!
//! ```bash
//! # In-memory tests
//! cargo test -p fastfood-integration-tests
//!
//! # Including the PostgreSQL tests (each runs against a migrated, empty database)
//! FASTFOOD_TEST_DATABASE_URL=postgres://localhost/fastfood_test \
//!     cargo test -p fastfood-integration-tests -- --include-ignored --test-threads=1
//! ```
//!
//! # Test Files
//!
//! - `seed_roles` - Role seeding
//! - `seed_admin` - Administrator account seeding
//! - `seed_sample_data` - Catalog seeding and step ordering
//! - `seed_all` - Full startup sequence
//! - `postgres_seed` - The same sequence against `PostgreSQL` (ignored by default)
