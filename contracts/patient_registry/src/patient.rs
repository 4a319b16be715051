use care_common::ttl;
use soroban_sdk::{contracttype, symbol_short, Address, Bytes, Env, String, Symbol};

/// Canonical registration record, keyed by the owning principal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patient {
    pub owner: Address,
    /// Externally meaningful member ID; unique across all patients.
    pub member_id: String,
    /// Opaque client-side encrypted blob. Never interpreted on-chain.
    pub encrypted_data: Bytes,
    pub registered_at: u64,
    pub updated_at: u64,
    /// Always `true` on-chain; no transition clears it. Carried for
    /// off-chain mirrors that deactivate records, and still checked by
    /// `update_patient` and `assign_provider`.
    pub active: bool,
    pub provider: Option<Address>,
}

/// Returned to the caller of `register_patient`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrationReceipt {
    pub patient: Address,
    pub member_id: String,
    pub registered_at: u64,
}

const PATIENT: Symbol = symbol_short!("PATIENT");
const MEMBER: Symbol = symbol_short!("MEMBER");
const TOTAL: Symbol = symbol_short!("PAT_TOTAL");

fn patient_key(owner: &Address) -> (Symbol, Address) {
    (PATIENT, owner.clone())
}

fn member_key(member_id: &String) -> (Symbol, String) {
    (MEMBER, member_id.clone())
}

// ── Record store ─────────────────────────────────────────────

pub fn has_patient(env: &Env, owner: &Address) -> bool {
    env.storage().persistent().has(&patient_key(owner))
}

pub fn get_patient(env: &Env, owner: &Address) -> Option<Patient> {
    let key = patient_key(owner);
    let patient: Option<Patient> = env.storage().persistent().get(&key);
    if patient.is_some() {
        ttl::extend_persistent(env, &key);
    }
    patient
}

pub fn set_patient(env: &Env, patient: &Patient) {
    let key = patient_key(&patient.owner);
    env.storage().persistent().set(&key, patient);
    ttl::extend_persistent(env, &key);
}

// ── Member ID index ──────────────────────────────────────────

pub fn member_owner(env: &Env, member_id: &String) -> Option<Address> {
    env.storage().persistent().get(&member_key(member_id))
}

pub fn reserve_member_id(env: &Env, member_id: &String, owner: &Address) {
    let key = member_key(member_id);
    env.storage().persistent().set(&key, owner);
    ttl::extend_persistent(env, &key);
}

// ── Counter ──────────────────────────────────────────────────

pub fn total(env: &Env) -> u64 {
    env.storage().instance().get(&TOTAL).unwrap_or(0)
}

pub fn increment_total(env: &Env) -> u64 {
    let next = total(env).saturating_add(1);
    env.storage().instance().set(&TOTAL, &next);
    next
}
