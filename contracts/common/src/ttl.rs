use soroban_sdk::{Env, IntoVal, Val};

/// 5,184,000 ledgers ~= 300 days (@ ~5s/ledger)
pub const TTL_THRESHOLD: u32 = 5_184_000;
/// 10,368,000 ledgers ~= 600 days (@ ~5s/ledger)
pub const TTL_EXTEND_TO: u32 = 10_368_000;

/// Bumps the TTL of a persistent entry that is known to exist.
pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Bumps the TTL of the contract instance (and all instance-storage keys).
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}
