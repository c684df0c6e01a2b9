//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth primitives.

pub mod user;

pub use user::UserService;
