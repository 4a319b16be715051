use soroban_sdk::{Bytes, Env, String};

use crate::errors::{reject, RegistryError};

/// Rejects an empty identifier (member ID, item ID, payment ID, ...).
pub fn require_non_empty(env: &Env, value: &String, operation: &str) -> Result<(), RegistryError> {
    if value.is_empty() {
        return Err(reject(env, RegistryError::EmptyField, operation));
    }
    Ok(())
}

/// Rejects an empty opaque payload.
pub fn require_payload(env: &Env, payload: &Bytes, operation: &str) -> Result<(), RegistryError> {
    if payload.is_empty() {
        return Err(reject(env, RegistryError::EmptyField, operation));
    }
    Ok(())
}

/// Rejects a payment that does not attach a strictly positive amount.
pub fn require_positive_payment(
    env: &Env,
    amount: i128,
    operation: &str,
) -> Result<(), RegistryError> {
    if amount <= 0 {
        return Err(reject(env, RegistryError::InsufficientPayment, operation));
    }
    Ok(())
}
