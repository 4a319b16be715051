//! Shared building blocks for the Care Ledger contract suite.
//!
//! This crate provides:
//! - [`RegistryError`]: the error taxonomy every contract returns.
//! - [`roles`]: the role directory and the single capability check used by
//!   every gated transition.
//! - [`audit`]: the per-contract audit sequence stamped on emitted events.
//! - [`escrow`]: token collection and withdrawal for contracts that hold funds.
//! - [`validation`] and [`ttl`] helpers.

#![no_std]

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod audit;
pub mod errors;
pub mod escrow;
pub mod roles;
pub mod ttl;
pub mod validation;

pub use errors::{reject, ErrorCategory, ErrorSeverity, RegistryError};
pub use roles::Role;
