#![allow(deprecated)] // events().publish migration tracked separately

use care_common::audit;
use soroban_sdk::{symbol_short, Address, Env, String};

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub seq: u64,
    pub admin: Address,
    pub token: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BillerAuthorizedEvent {
    pub seq: u64,
    pub biller: Address,
    pub authorized_by: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BillIssuedEvent {
    pub seq: u64,
    pub bill_id: String,
    pub member_id: String,
    pub amount: i128,
    pub issued_by: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BillPaidEvent {
    pub seq: u64,
    pub bill_id: String,
    pub member_id: String,
    pub amount: i128,
    pub paid_by: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub seq: u64,
    pub recipient: Address,
    pub amount: i128,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address, token: Address) {
    let data = InitializedEvent {
        seq: audit::next_seq(env),
        admin,
        token,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((symbol_short!("INIT"),), data);
}

pub fn publish_biller_authorized(env: &Env, biller: Address, authorized_by: Address) {
    let topics = (symbol_short!("BILR_AUTH"), biller.clone());
    let data = BillerAuthorizedEvent {
        seq: audit::next_seq(env),
        biller,
        authorized_by,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_bill_issued(
    env: &Env,
    bill_id: String,
    member_id: String,
    amount: i128,
    issued_by: Address,
) {
    let topics = (symbol_short!("BILL_ISS"), bill_id.clone());
    let data = BillIssuedEvent {
        seq: audit::next_seq(env),
        bill_id,
        member_id,
        amount,
        issued_by,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_bill_paid(
    env: &Env,
    bill_id: String,
    member_id: String,
    amount: i128,
    paid_by: Address,
) {
    let topics = (symbol_short!("BILL_PAY"), bill_id.clone(), paid_by.clone());
    let data = BillPaidEvent {
        seq: audit::next_seq(env),
        bill_id,
        member_id,
        amount,
        paid_by,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_withdrawn(env: &Env, recipient: Address, amount: i128) {
    let topics = (symbol_short!("WITHDRAW"), recipient.clone());
    let data = WithdrawnEvent {
        seq: audit::next_seq(env),
        recipient,
        amount,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
