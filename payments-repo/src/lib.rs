//! # Payments Repository
//!
//! Concrete repository implementations (adapters) for the payments service.
//! This crate provides the in-memory adapters that implement the
//! `UserRepository` and `PaymentRepository` ports.

pub mod memory;

#[cfg(test)]
mod memory_tests;

pub use memory::{InMemoryPaymentRepository, InMemoryUserRepository};
