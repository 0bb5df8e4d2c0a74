//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without I/O concerns. Separate
//! structs cover creation ([`NewUser`]) and partial updates
//! ([`UserPatch`]).

pub mod user;

pub use user::{NewUser, User, UserPatch};
