//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations following the
//! Repository pattern; concrete implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod user_repository;

pub use user_repository::UserRepository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
