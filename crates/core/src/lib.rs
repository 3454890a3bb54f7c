//! Pure domain logic for moving one character between game-server schemas.
//!
//! Nothing in this crate touches a database. The `chartransfer-db` crate
//! supplies the I/O around these types.

pub mod error;
pub mod identity;
pub mod inventory;
pub mod mapping;
pub mod tables;
pub mod types;
