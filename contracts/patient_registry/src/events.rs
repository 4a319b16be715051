#![allow(deprecated)] // events().publish migration tracked separately

use care_common::audit;
use soroban_sdk::{symbol_short, Address, Env, String};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the registry is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub seq: u64,
    pub admin: Address,
    pub timestamp: u64,
}

/// Fired when a patient registers under a member ID.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRegisteredEvent {
    pub seq: u64,
    pub patient: Address,
    pub member_id: String,
    pub timestamp: u64,
}

/// Fired when a patient replaces their encrypted payload.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientUpdatedEvent {
    pub seq: u64,
    pub patient: Address,
    pub member_id: String,
    pub timestamp: u64,
}

/// Fired when the custodian grants the provider role.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderAuthorizedEvent {
    pub seq: u64,
    pub provider: Address,
    pub authorized_by: Address,
    pub timestamp: u64,
}

/// Fired when the custodian points a patient record at a provider.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderAssignedEvent {
    pub seq: u64,
    pub patient: Address,
    pub member_id: String,
    pub provider: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, admin: Address) {
    let data = InitializedEvent {
        seq: audit::next_seq(env),
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((symbol_short!("INIT"),), data);
}

pub fn publish_patient_registered(env: &Env, patient: Address, member_id: String) {
    let topics = (symbol_short!("PAT_REG"), patient.clone());
    let data = PatientRegisteredEvent {
        seq: audit::next_seq(env),
        patient,
        member_id,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_patient_updated(env: &Env, patient: Address, member_id: String) {
    let topics = (symbol_short!("PAT_UPD"), patient.clone());
    let data = PatientUpdatedEvent {
        seq: audit::next_seq(env),
        patient,
        member_id,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_provider_authorized(env: &Env, provider: Address, authorized_by: Address) {
    let topics = (symbol_short!("PRV_AUTH"), provider.clone());
    let data = ProviderAuthorizedEvent {
        seq: audit::next_seq(env),
        provider,
        authorized_by,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_provider_assigned(
    env: &Env,
    patient: Address,
    member_id: String,
    provider: Address,
) {
    let topics = (
        symbol_short!("PRV_ASGN"),
        patient.clone(),
        provider.clone(),
    );
    let data = ProviderAssignedEvent {
        seq: audit::next_seq(env),
        patient,
        member_id,
        provider,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
