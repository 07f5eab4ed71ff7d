use common::ttl;
use soroban_sdk::{Address, Env, String, Vec};

use crate::types::{DataKey, PatientRecord};
use crate::validation;
use crate::ContractError;

fn key(patient: &Address) -> DataKey {
    DataKey::Patient(patient.clone())
}

pub fn exists(env: &Env, patient: &Address) -> bool {
    env.storage().persistent().has(&key(patient))
}

pub fn load(env: &Env, patient: &Address) -> Option<PatientRecord> {
    let key = key(patient);
    let record: Option<PatientRecord> = env.storage().persistent().get(&key);
    if record.is_some() {
        ttl::extend_persistent(env, &key);
    }
    record
}

pub fn save(env: &Env, record: &PatientRecord) {
    let key = key(&record.patient);
    env.storage().persistent().set(&key, record);
    ttl::extend_persistent(env, &key);
}

/// Creates the record for `patient` with empty prescription and provider lists.
pub fn register(
    env: &Env,
    patient: &Address,
    medical_history: String,
    genetic_profile: String,
) -> Result<PatientRecord, ContractError> {
    validation::validate_patient_fields(&medical_history, &genetic_profile)?;

    if exists(env, patient) {
        return Err(ContractError::DuplicatePatientRecord);
    }

    let record = PatientRecord {
        patient: patient.clone(),
        medical_history,
        genetic_profile,
        prescriptions: Vec::new(env),
        authorized_providers: Vec::new(env),
        registered_at: env.ledger().timestamp(),
    };
    save(env, &record);

    Ok(record)
}
