//! Per-patient authorized-provider lists.
//!
//! [`is_authorized`] is the only gate consulted before a provider acts on a
//! patient's prescriptions. The list is append-only: there is no revoke.

use common::push_unique_bounded;
use soroban_sdk::{Address, Env, Vec};

use crate::types::MAX_AUTHORIZED_PROVIDERS;
use crate::{map_authorization_error, patient, ContractError};

/// `false` when the patient has no record.
pub fn is_authorized(env: &Env, patient: &Address, provider: &Address) -> bool {
    match patient::load(env, patient) {
        Some(record) => record.authorized_providers.contains(provider),
        None => false,
    }
}

/// Appends `provider` to the patient's list, returning the new list length.
pub fn authorize_provider(
    env: &Env,
    patient: &Address,
    provider: &Address,
) -> Result<u32, ContractError> {
    let mut record =
        patient::load(env, patient).ok_or(ContractError::PatientRecordNotFound)?;

    push_unique_bounded(
        &mut record.authorized_providers,
        provider.clone(),
        MAX_AUTHORIZED_PROVIDERS,
    )
    .map_err(map_authorization_error)?;

    patient::save(env, &record);
    Ok(record.authorized_providers.len())
}

pub fn authorized_providers(env: &Env, patient: &Address) -> Vec<Address> {
    match patient::load(env, patient) {
        Some(record) => record.authorized_providers,
        None => Vec::new(env),
    }
}
