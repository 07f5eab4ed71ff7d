use soroban_sdk::{contracttype, Address, String, Vec};

/// Maximum number of providers a patient may authorize.
pub const MAX_AUTHORIZED_PROVIDERS: u32 = 5;
/// Capacity of the informational prescription list kept on a patient record.
pub const MAX_PATIENT_PRESCRIPTIONS: u32 = 10;
/// Capacity of the contract-wide prescription index.
pub const MAX_INDEXED_PRESCRIPTIONS: u32 = 100;

pub const MAX_MEDICAL_HISTORY_LEN: u32 = 256;
pub const MAX_GENETIC_PROFILE_LEN: u32 = 256;
pub const MAX_SPECIALIZATION_LEN: u32 = 64;
pub const MAX_LICENSE_ID_LEN: u32 = 32;
pub const MAX_MEDICATION_LEN: u32 = 64;
pub const MAX_DOSAGE_LEN: u32 = 32;

/// Persistent storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Patient(Address),
    Provider(Address),
    Prescription(u64),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRecord {
    pub patient: Address,
    pub medical_history: String,
    pub genetic_profile: String,
    /// Ids known to belong to this patient, capped at
    /// `MAX_PATIENT_PRESCRIPTIONS`. Lifecycle state lives on the prescription.
    pub prescriptions: Vec<u64>,
    /// Insertion-ordered, duplicate-free, at most `MAX_AUTHORIZED_PROVIDERS`.
    pub authorized_providers: Vec<Address>,
    pub registered_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderRecord {
    pub provider: Address,
    pub specialization: String,
    pub license_id: String,
    pub is_active: bool,
    pub registered_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Prescription {
    pub id: u64,
    pub patient: Address,
    pub provider: Address,
    pub medication: String,
    pub dosage: String,
    pub start_ts: u64,
    pub end_ts: u64,
    pub is_active: bool,
    pub created_at: u64,
    pub deactivated_at: Option<u64>,
    pub deactivated_by: Option<Address>,
}

/// Capacities and text bounds enforced by the contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryLimits {
    pub max_authorized_providers: u32,
    pub max_patient_prescriptions: u32,
    pub max_indexed_prescriptions: u32,
    pub max_medical_history_len: u32,
    pub max_genetic_profile_len: u32,
    pub max_specialization_len: u32,
    pub max_license_id_len: u32,
    pub max_medication_len: u32,
    pub max_dosage_len: u32,
}

impl RegistryLimits {
    pub fn current() -> Self {
        RegistryLimits {
            max_authorized_providers: MAX_AUTHORIZED_PROVIDERS,
            max_patient_prescriptions: MAX_PATIENT_PRESCRIPTIONS,
            max_indexed_prescriptions: MAX_INDEXED_PRESCRIPTIONS,
            max_medical_history_len: MAX_MEDICAL_HISTORY_LEN,
            max_genetic_profile_len: MAX_GENETIC_PROFILE_LEN,
            max_specialization_len: MAX_SPECIALIZATION_LEN,
            max_license_id_len: MAX_LICENSE_ID_LEN,
            max_medication_len: MAX_MEDICATION_LEN,
            max_dosage_len: MAX_DOSAGE_LEN,
        }
    }
}
