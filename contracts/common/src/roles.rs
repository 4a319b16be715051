use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

use crate::errors::{reject, RegistryError};
use crate::ttl;

// ── Storage Keys ─────────────────────────────────────────────────────────────

const ROLE_PREFIX: Symbol = symbol_short!("ROLES");
const CUSTODIAN: Symbol = symbol_short!("CUSTODIAN");

// ── Role Enum ────────────────────────────────────────────────────────────────

/// Roles a principal can hold.
///
/// - `Custodian` – the single root principal, bootstrapped at initialisation.
///                 Grants roles, assigns providers and withdraws funds.
/// - `Provider`  – a care provider (or biller) that records can point to.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Custodian = 1,
    Provider = 2,
}

// ── Storage Helpers ──────────────────────────────────────────────────────────

fn role_key(principal: &Address) -> (Symbol, Address) {
    (ROLE_PREFIX, principal.clone())
}

/// Returns `false` when `principal` already held `role` and nothing was written.
fn store_role(env: &Env, principal: &Address, role: Role) -> bool {
    let key = role_key(principal);
    let mut roles = roles_of(env, principal);
    if roles.contains(role) {
        return false;
    }
    roles.push_back(role);
    env.storage().persistent().set(&key, &roles);
    ttl::extend_persistent(env, &key);
    true
}

// ── Core Functions ───────────────────────────────────────────────────────────

/// Returns every role held by `principal`, in grant order.
pub fn roles_of(env: &Env, principal: &Address) -> Vec<Role> {
    env.storage()
        .persistent()
        .get(&role_key(principal))
        .unwrap_or(Vec::new(env))
}

/// The capability check every gated transition goes through.
pub fn has_role(env: &Env, principal: &Address, role: Role) -> bool {
    roles_of(env, principal).contains(role)
}

/// Guard for the caller of a transition.
pub fn require_role(
    env: &Env,
    caller: &Address,
    role: Role,
    operation: &str,
) -> Result<(), RegistryError> {
    if !has_role(env, caller, role) {
        return Err(reject(env, RegistryError::Unauthorized, operation));
    }
    Ok(())
}

/// Guard for the principal a transition points at.
pub fn require_target_role(
    env: &Env,
    target: &Address,
    role: Role,
    operation: &str,
) -> Result<(), RegistryError> {
    if !has_role(env, target, role) {
        return Err(reject(env, RegistryError::UnauthorizedTarget, operation));
    }
    Ok(())
}

// ── Custodian ────────────────────────────────────────────────────────────────

/// Installs the deployment's one and only custodian.
pub fn bootstrap_custodian(env: &Env, admin: &Address) -> Result<(), RegistryError> {
    if env.storage().instance().has(&CUSTODIAN) {
        return Err(reject(env, RegistryError::AlreadyInitialized, "initialize"));
    }
    env.storage().instance().set(&CUSTODIAN, admin);
    store_role(env, admin, Role::Custodian);
    Ok(())
}

/// Returns the custodian address, if the contract has been initialised.
pub fn get_custodian(env: &Env) -> Option<Address> {
    env.storage().instance().get(&CUSTODIAN)
}

/// Like [`get_custodian`] but fails on an uninitialised contract.
pub fn custodian(env: &Env) -> Result<Address, RegistryError> {
    get_custodian(env).ok_or(RegistryError::NotInitialized)
}

// ── Grants ───────────────────────────────────────────────────────────────────

/// Grants `role` to `grantee` on behalf of `granter`.
///
/// Only the custodian may grant, and the custodian role itself is never
/// granted. Grants are idempotent and there is no revoke path; the result is
/// `true` only when `grantee` did not already hold `role`.
pub fn grant_role(
    env: &Env,
    granter: &Address,
    grantee: &Address,
    role: Role,
    operation: &str,
) -> Result<bool, RegistryError> {
    require_role(env, granter, Role::Custodian, operation)?;
    if role == Role::Custodian {
        return Err(reject(env, RegistryError::InvalidRole, operation));
    }
    Ok(store_role(env, grantee, role))
}
