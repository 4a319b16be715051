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

/// Fired when a payment settles an item.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentProcessedEvent {
    pub seq: u64,
    pub payment_id: String,
    pub item_id: String,
    pub member_id: String,
    pub payer: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when the custodian drains the escrow.
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

pub fn publish_payment_processed(
    env: &Env,
    payment_id: String,
    item_id: String,
    member_id: String,
    payer: Address,
    amount: i128,
) {
    let topics = (symbol_short!("PAY_DONE"), payment_id.clone(), payer.clone());
    let data = PaymentProcessedEvent {
        seq: audit::next_seq(env),
        payment_id,
        item_id,
        member_id,
        payer,
        amount,
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
