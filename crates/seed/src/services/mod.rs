//! Services used by the seeders.

pub mod password;
