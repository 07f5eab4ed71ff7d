use common::is_within_bounds;
use soroban_sdk::String;

use crate::types::{
    MAX_DOSAGE_LEN, MAX_GENETIC_PROFILE_LEN, MAX_LICENSE_ID_LEN, MAX_MEDICAL_HISTORY_LEN,
    MAX_MEDICATION_LEN, MAX_SPECIALIZATION_LEN,
};
use crate::ContractError;

fn check_len(value: &String, max_len: u32) -> Result<(), ContractError> {
    if !is_within_bounds(value, max_len) {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

/// Validate the free-text fields of a patient registration.
pub fn validate_patient_fields(
    medical_history: &String,
    genetic_profile: &String,
) -> Result<(), ContractError> {
    check_len(medical_history, MAX_MEDICAL_HISTORY_LEN)?;
    check_len(genetic_profile, MAX_GENETIC_PROFILE_LEN)
}

/// Validate the free-text fields of a provider registration.
pub fn validate_provider_fields(
    specialization: &String,
    license_id: &String,
) -> Result<(), ContractError> {
    check_len(specialization, MAX_SPECIALIZATION_LEN)?;
    check_len(license_id, MAX_LICENSE_ID_LEN)
}

/// A prescription window must end strictly after it starts.
pub fn validate_prescription_window(start_ts: u64, end_ts: u64) -> Result<(), ContractError> {
    if start_ts >= end_ts {
        return Err(ContractError::InvalidPrescriptionData);
    }
    Ok(())
}

/// Validate medication and dosage text.
pub fn validate_prescription_fields(
    medication: &String,
    dosage: &String,
) -> Result<(), ContractError> {
    check_len(medication, MAX_MEDICATION_LEN)?;
    check_len(dosage, MAX_DOSAGE_LEN)
}
