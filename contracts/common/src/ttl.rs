use soroban_sdk::{Env, IntoVal, Val};

/// Ledgers remaining before an entry's TTL is bumped.
pub const TTL_THRESHOLD: u32 = 5_184_000;
/// Ledgers an entry lives for after being bumped.
pub const TTL_EXTEND_TO: u32 = 10_368_000;

/// Extends the time-to-live of a persistent storage entry.
pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends the time-to-live of the contract instance (all instance keys).
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}
