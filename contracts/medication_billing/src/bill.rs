use care_common::ttl;
use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BillingConfig {
    pub admin: Address,
    pub token: Address,
}

/// Bills only move forward: `Issued` to `Paid`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BillStatus {
    Issued,
    Paid,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bill {
    pub bill_id: String,
    pub member_id: String,
    pub medication: String,
    pub amount: i128,
    pub issued_by: Address,
    pub issued_at: u64,
    pub status: BillStatus,
    pub paid_by: Option<Address>,
    /// Zero until the bill is paid.
    pub paid_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BillingStats {
    pub issued: u64,
    pub paid: u64,
    pub amount_collected: i128,
    pub balance: i128,
}

const CONFIG: Symbol = symbol_short!("CONFIG");
const BILL: Symbol = symbol_short!("BILL");
const MEMBER_BILLS: Symbol = symbol_short!("MEM_BILLS");
const MEMBER_CNT: Symbol = symbol_short!("MEM_BCNT");
const ISSUED: Symbol = symbol_short!("ISSUED");
const PAID: Symbol = symbol_short!("PAID");
const COLLECTED: Symbol = symbol_short!("COLLECTED");

fn bill_key(bill_id: &String) -> (Symbol, String) {
    (BILL, bill_id.clone())
}

fn member_entry_key(member_id: &String, n: u32) -> (Symbol, String, u32) {
    (MEMBER_BILLS, member_id.clone(), n)
}

fn member_count_key(member_id: &String) -> (Symbol, String) {
    (MEMBER_CNT, member_id.clone())
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&CONFIG)
}

pub fn get_config(env: &Env) -> Option<BillingConfig> {
    env.storage().instance().get(&CONFIG)
}

pub fn set_config(env: &Env, config: &BillingConfig) {
    env.storage().instance().set(&CONFIG, config);
}

pub fn has_bill(env: &Env, bill_id: &String) -> bool {
    env.storage().persistent().has(&bill_key(bill_id))
}

pub fn get_bill(env: &Env, bill_id: &String) -> Option<Bill> {
    let key = bill_key(bill_id);
    let bill: Option<Bill> = env.storage().persistent().get(&key);
    if bill.is_some() {
        ttl::extend_persistent(env, &key);
    }
    bill
}

pub fn set_bill(env: &Env, bill: &Bill) {
    let key = bill_key(&bill.bill_id);
    env.storage().persistent().set(&key, bill);
    ttl::extend_persistent(env, &key);
}

fn member_count(env: &Env, member_id: &String) -> u32 {
    env.storage()
        .persistent()
        .get(&member_count_key(member_id))
        .unwrap_or(0)
}

pub fn member_bills(env: &Env, member_id: &String) -> Vec<String> {
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
pub fn append_member_bill(env: &Env, member_id: &String, bill_id: &String) {
    if member_id.is_empty() {
        return;
    }
    let n = member_count(env, member_id);
    let entry = member_entry_key(member_id, n);
    env.storage().persistent().set(&entry, bill_id);
    ttl::extend_persistent(env, &entry);

    let count = member_count_key(member_id);
    env.storage().persistent().set(&count, &n.saturating_add(1));
    ttl::extend_persistent(env, &count);
}

// ── Counters ─────────────────────────────────────────────────

pub fn issued_count(env: &Env) -> u64 {
    env.storage().instance().get(&ISSUED).unwrap_or(0)
}

pub fn paid_count(env: &Env) -> u64 {
    env.storage().instance().get(&PAID).unwrap_or(0)
}

pub fn amount_collected(env: &Env) -> i128 {
    env.storage().instance().get(&COLLECTED).unwrap_or(0)
}

pub fn record_issued(env: &Env) {
    let next = issued_count(env).saturating_add(1);
    env.storage().instance().set(&ISSUED, &next);
}

pub fn record_paid(env: &Env, amount: i128) {
    let paid = paid_count(env).saturating_add(1);
    let collected = amount_collected(env).saturating_add(amount);
    env.storage().instance().set(&PAID, &paid);
    env.storage().instance().set(&COLLECTED, &collected);
}
