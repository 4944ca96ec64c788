//! # Payments Types
//!
//! Domain types and port traits for the payment service.
//! This crate has ZERO IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (User, Payment)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for caller boundaries
//! - `error/` - Domain, repository and application error types
//!
//! Enable the `mocks` feature to get `mockall` doubles of every port.

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Payment, PaymentId, User, UserId, UserStatus};
pub use dto::*;
pub use error::{AppError, DomainError, ErrorKind, RepoError};
pub use ports::{PaymentRepository, UserRepository, ValidationService};
