//! # Payments Hex
//!
//! Application service layer for the payments service.
//!
//! ## Architecture
//!
//! - `validation/` - Argument and business-rule checks
//! - `service/` - Application service (orchestrates validation and repositories)
//!
//! The service is generic over its user repository, payment repository
//! and validator, allowing different implementations to be injected.

pub mod service;
pub mod validation;


pub use service::PaymentService;
pub use validation::BasicValidationService;

/// Service wired to the in-memory adapters and the basic validator.
pub type InMemoryPaymentService = PaymentService<
    payments_repo::InMemoryUserRepository,
    payments_repo::InMemoryPaymentRepository,
    BasicValidationService,
>;
