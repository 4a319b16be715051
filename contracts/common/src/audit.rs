use soroban_sdk::{symbol_short, Env, Symbol};

const AUDIT_SEQ: Symbol = symbol_short!("AUDIT_SEQ");

/// Reserves the next audit sequence number.
///
/// Called exactly once by every accepted transition, right before its event
/// is published, so sequence numbers are gap-free and follow ledger order.
pub fn next_seq(env: &Env) -> u64 {
    let next = current_seq(env).saturating_add(1);
    env.storage().instance().set(&AUDIT_SEQ, &next);
    next
}

/// Number of audit events emitted so far.
pub fn current_seq(env: &Env) -> u64 {
    env.storage().instance().get(&AUDIT_SEQ).unwrap_or(0)
}
