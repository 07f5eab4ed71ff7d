//! Prescription lifecycle and the patient-scoped active view.
//!
//! Ids come from a contract-wide counter in instance storage and are recorded
//! in a bounded, append-only index in creation order. The active view is a
//! scan over that index; nothing derived from it is ever stored.

use common::{push_bounded, ttl};
use soroban_sdk::{symbol_short, Address, Env, String, Symbol, Vec};

use crate::types::{
    DataKey, Prescription, MAX_INDEXED_PRESCRIPTIONS, MAX_PATIENT_PRESCRIPTIONS,
};
use crate::{authorization, map_index_error, patient, provider, validation, ContractError};

const RX_COUNTER: Symbol = symbol_short!("RX_CTR");
const RX_INDEX: Symbol = symbol_short!("RX_IDX");

/// Input for a new prescription, as supplied by the prescribing provider.
pub struct NewPrescription {
    pub patient: Address,
    pub medication: String,
    pub dosage: String,
    pub start_ts: u64,
    pub end_ts: u64,
}

/// The id the next successful creation will receive.
pub fn next_id(env: &Env) -> u64 {
    env.storage().instance().get(&RX_COUNTER).unwrap_or(0)
}

/// Every created prescription id, in creation order.
pub fn index(env: &Env) -> Vec<u64> {
    env.storage()
        .instance()
        .get(&RX_INDEX)
        .unwrap_or(Vec::new(env))
}

pub fn get(env: &Env, id: u64) -> Option<Prescription> {
    let key = DataKey::Prescription(id);
    let rx: Option<Prescription> = env.storage().persistent().get(&key);
    if rx.is_some() {
        ttl::extend_persistent(env, &key);
    }
    rx
}

fn save(env: &Env, rx: &Prescription) {
    let key = DataKey::Prescription(rx.id);
    env.storage().persistent().set(&key, rx);
    ttl::extend_persistent(env, &key);
}

/// Issues a prescription on behalf of `prescriber`.
///
/// Every check runs before the first write, so a rejected call leaves the
/// counter, the index and both registries untouched.
pub fn create(
    env: &Env,
    prescriber: &Address,
    input: NewPrescription,
) -> Result<Prescription, ContractError> {
    if !authorization::is_authorized(env, &input.patient, prescriber) {
        return Err(ContractError::Unauthorized);
    }
    validation::validate_prescription_window(input.start_ts, input.end_ts)?;
    validation::validate_prescription_fields(&input.medication, &input.dosage)?;
    if !provider::exists(env, prescriber) {
        return Err(ContractError::ProviderRecordNotFound);
    }

    let id = next_id(env);
    let mut ids = index(env);
    push_bounded(&mut ids, id, MAX_INDEXED_PRESCRIPTIONS).map_err(map_index_error)?;

    let mut patient_record =
        patient::load(env, &input.patient).ok_or(ContractError::PatientRecordNotFound)?;

    let now = env.ledger().timestamp();
    let rx = Prescription {
        id,
        patient: input.patient,
        provider: prescriber.clone(),
        medication: input.medication,
        dosage: input.dosage,
        start_ts: input.start_ts,
        end_ts: input.end_ts,
        is_active: true,
        created_at: now,
        deactivated_at: None,
        deactivated_by: None,
    };

    save(env, &rx);
    env.storage().instance().set(&RX_COUNTER, &(id + 1));
    env.storage().instance().set(&RX_INDEX, &ids);
    ttl::extend_instance(env);

    // The patient list only mirrors the first ids; the index stays authoritative.
    if push_bounded(&mut patient_record.prescriptions, id, MAX_PATIENT_PRESCRIPTIONS).is_ok() {
        patient::save(env, &patient_record);
    }

    Ok(rx)
}

/// Moves a prescription to its terminal inactive state.
///
/// Returns the updated prescription, or `None` when it was already inactive
/// (nothing is written then).
pub fn deactivate(
    env: &Env,
    caller: &Address,
    id: u64,
) -> Result<Option<Prescription>, ContractError> {
    let mut rx = get(env, id).ok_or(ContractError::InvalidPrescriptionData)?;

    if *caller != rx.provider && *caller != rx.patient {
        return Err(ContractError::Unauthorized);
    }
    if !rx.is_active {
        return Ok(None);
    }

    rx.is_active = false;
    rx.deactivated_at = Some(env.ledger().timestamp());
    rx.deactivated_by = Some(caller.clone());
    save(env, &rx);

    Ok(Some(rx))
}

/// Ids of `patient`'s active prescriptions, in creation order.
pub fn active_for(env: &Env, patient: &Address) -> Vec<u64> {
    let mut active = Vec::new(env);
    for id in index(env).iter() {
        match get(env, id) {
            Some(rx) if rx.is_active && rx.patient == *patient => active.push_back(id),
            Some(_) => {}
            None => {}
        }
    }
    active
}
