//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&MySqlPool` as the first argument.

pub mod character_repo;
pub mod transfer_repo;

pub use character_repo::CharacterRepo;
pub use transfer_repo::TransferRepo;
