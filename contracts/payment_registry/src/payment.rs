use care_common::ttl;
use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol, Vec};

/// Deployment configuration, written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentConfig {
    /// Custodian; the only principal that can withdraw.
    pub admin: Address,
    /// Token contract payments are made in.
    pub token: Address,
}

/// A settled payment for a single billable item.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payment {
    pub payment_id: String,
    /// The thing being paid for. Each item can be paid exactly once.
    pub item_id: String,
    /// Free-form kind of item, e.g. `"bill"` or `"prescription"`.
    pub item_type: String,
    pub member_id: String,
    pub payer: Address,
    pub amount: i128,
    pub paid_at: u64,
    pub completed: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentStats {
    pub count_processed: u64,
    /// Lifetime total; withdrawals do not reduce it.
    pub amount_processed: i128,
    /// Tokens currently held in escrow by the contract.
    pub balance: i128,
}

const CONFIG: Symbol = symbol_short!("CONFIG");
const PAYMENT: Symbol = symbol_short!("PAYMENT");
const ITEM_PAID: Symbol = symbol_short!("ITEM_PAID");
const MEMBER_PAY: Symbol = symbol_short!("MEM_PAY");
const MEMBER_CNT: Symbol = symbol_short!("MEM_PCNT");
const COUNT: Symbol = symbol_short!("PAY_CNT");
const AMOUNT: Symbol = symbol_short!("PAY_AMT");

fn payment_key(payment_id: &String) -> (Symbol, String) {
    (PAYMENT, payment_id.clone())
}

fn item_key(item_id: &String) -> (Symbol, String) {
    (ITEM_PAID, item_id.clone())
}

fn member_entry_key(member_id: &String, n: u32) -> (Symbol, String, u32) {
    (MEMBER_PAY, member_id.clone(), n)
}

fn member_count_key(member_id: &String) -> (Symbol, String) {
    (MEMBER_CNT, member_id.clone())
}

// ── Config ───────────────────────────────────────────────────

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&CONFIG)
}

pub fn get_config(env: &Env) -> Option<PaymentConfig> {
    env.storage().instance().get(&CONFIG)
}

pub fn set_config(env: &Env, config: &PaymentConfig) {
    env.storage().instance().set(&CONFIG, config);
}

// ── Payments ─────────────────────────────────────────────────

pub fn has_payment(env: &Env, payment_id: &String) -> bool {
    env.storage().persistent().has(&payment_key(payment_id))
}

pub fn get_payment(env: &Env, payment_id: &String) -> Option<Payment> {
    let key = payment_key(payment_id);
    let payment: Option<Payment> = env.storage().persistent().get(&key);
    if payment.is_some() {
        ttl::extend_persistent(env, &key);
    }
    payment
}

pub fn set_payment(env: &Env, payment: &Payment) {
    let key = payment_key(&payment.payment_id);
    env.storage().persistent().set(&key, payment);
    ttl::extend_persistent(env, &key);
}

// ── Item index ───────────────────────────────────────────────

/// Payment that settled `item_id`, if any.
pub fn item_payment(env: &Env, item_id: &String) -> Option<String> {
    env.storage().persistent().get(&item_key(item_id))
}

pub fn mark_item_paid(env: &Env, item_id: &String, payment_id: &String) {
    let key = item_key(item_id);
    env.storage().persistent().set(&key, payment_id);
    ttl::extend_persistent(env, &key);
}

// ── Member index ─────────────────────────────────────────────

fn member_count(env: &Env, member_id: &String) -> u32 {
    env.storage()
        .persistent()
        .get(&member_count_key(member_id))
        .unwrap_or(0)
}

pub fn member_payments(env: &Env, member_id: &String) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new(env);
    for n in 0..member_count(env, member_id) {
        if let Some(id) = env.storage().persistent().get::<_, String>(&member_entry_key(member_id, n)) {
            ids.push_back(id);
        }
    }
    ids
}

/// Each id gets its own entry next to a per-member counter. Empty member IDs
/// are not indexed.
pub fn append_member_payment(env: &Env, member_id: &String, payment_id: &String) {
    if member_id.is_empty() {
        return;
    }
    let n = member_count(env, member_id);
    let entry = member_entry_key(member_id, n);
    env.storage().persistent().set(&entry, payment_id);
    ttl::extend_persistent(env, &entry);

    let count = member_count_key(member_id);
    env.storage().persistent().set(&count, &n.saturating_add(1));
    ttl::extend_persistent(env, &count);
}

// ── Totals ───────────────────────────────────────────────────

pub fn count_processed(env: &Env) -> u64 {
    env.storage().instance().get(&COUNT).unwrap_or(0)
}

pub fn amount_processed(env: &Env) -> i128 {
    env.storage().instance().get(&AMOUNT).unwrap_or(0)
}

pub fn record_totals(env: &Env, amount: i128) {
    let count = count_processed(env).saturating_add(1);
    let total = amount_processed(env).saturating_add(amount);
    env.storage().instance().set(&COUNT, &count);
    env.storage().instance().set(&AMOUNT, &total);
}
