use common::ttl;
use soroban_sdk::{Address, Env, String};

use crate::types::{DataKey, ProviderRecord};
use crate::validation;
use crate::ContractError;

fn key(provider: &Address) -> DataKey {
    DataKey::Provider(provider.clone())
}

pub fn exists(env: &Env, provider: &Address) -> bool {
    env.storage().persistent().has(&key(provider))
}

pub fn load(env: &Env, provider: &Address) -> Option<ProviderRecord> {
    let key = key(provider);
    let record: Option<ProviderRecord> = env.storage().persistent().get(&key);
    if record.is_some() {
        ttl::extend_persistent(env, &key);
    }
    record
}

/// Returns `false` for unknown providers rather than an error.
pub fn is_active(env: &Env, provider: &Address) -> bool {
    match load(env, provider) {
        Some(record) => record.is_active,
        None => false,
    }
}

pub fn register(
    env: &Env,
    provider: &Address,
    specialization: String,
    license_id: String,
) -> Result<ProviderRecord, ContractError> {
    validation::validate_provider_fields(&specialization, &license_id)?;

    if exists(env, provider) {
        return Err(ContractError::DuplicateProviderRecord);
    }

    let record = ProviderRecord {
        provider: provider.clone(),
        specialization,
        license_id,
        is_active: true,
        registered_at: env.ledger().timestamp(),
    };

    let key = key(provider);
    env.storage().persistent().set(&key, &record);
    ttl::extend_persistent(env, &key);

    Ok(record)
}
