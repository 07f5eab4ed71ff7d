//! # Prescription Registry Contract
//!
//! Access-controlled store for patients, providers and prescriptions.
//!
//! ## Roles
//! | Caller   | May                                                        |
//! |----------|------------------------------------------------------------|
//! | Patient  | register, authorize up to 5 providers, deactivate own Rx   |
//! | Provider | register, prescribe for patients who authorized them,     |
//! |          | deactivate prescriptions they issued                       |
//! | Anyone   | read registry entries and the active-prescription view     |
//!
//! ## Prescription lifecycle
//! ```text
//! create ──► Active ──deactivate──► Inactive (terminal)
//! ```
//! Ids are sequential from 0 and recorded in a 100-entry index in creation
//! order. A rejected call writes nothing and consumes no id.
#![no_std]

pub mod authorization;
pub mod events;
pub mod patient;
pub mod prescription;
pub mod provider;
pub mod types;
pub mod validation;

use common::BoundedListError;
use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String, Vec};

use crate::prescription::NewPrescription;
pub use crate::types::{PatientRecord, Prescription, ProviderRecord, RegistryLimits};

/// Contract errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Caller lacks the relationship the operation requires.
    Unauthorized = 1,
    DuplicatePatientRecord = 2,
    DuplicateProviderRecord = 3,
    PatientRecordNotFound = 4,
    ProviderRecordNotFound = 5,
    /// Bad prescription window, or an unknown prescription id.
    InvalidPrescriptionData = 6,
    /// A text field is empty or longer than its bound.
    InvalidInput = 7,
    ProviderAlreadyAuthorized = 8,
    MaxProvidersReached = 9,
    PrescriptionListOverflow = 10,
}

pub(crate) fn map_authorization_error(e: BoundedListError) -> ContractError {
    match e {
        BoundedListError::Full => ContractError::MaxProvidersReached,
        BoundedListError::Duplicate => ContractError::ProviderAlreadyAuthorized,
    }
}

pub(crate) fn map_index_error(_e: BoundedListError) -> ContractError {
    ContractError::PrescriptionListOverflow
}

#[contract]
pub struct PrescriptionRegistryContract;

#[contractimpl]
impl PrescriptionRegistryContract {
    // ======================== Patient Registry ========================

    /// Register the calling patient.
    pub fn register_patient(
        env: Env,
        patient: Address,
        medical_history: String,
        genetic_profile: String,
    ) -> Result<(), ContractError> {
        patient.require_auth();

        patient::register(&env, &patient, medical_history, genetic_profile)?;

        events::publish_patient_registered(&env, patient);
        Ok(())
    }

    /// Get a patient record. Existence of a record is not access-controlled.
    pub fn get_patient_record(env: Env, patient: Address) -> Option<PatientRecord> {
        patient::load(&env, &patient)
    }

    // ======================== Provider Registry ========================

    /// Register the calling provider. New providers start active.
    pub fn register_provider(
        env: Env,
        provider: Address,
        specialization: String,
        license_id: String,
    ) -> Result<(), ContractError> {
        provider.require_auth();

        let record = provider::register(&env, &provider, specialization, license_id)?;

        events::publish_provider_registered(
            &env,
            provider,
            record.specialization,
            record.license_id,
        );
        Ok(())
    }

    pub fn get_provider_record(env: Env, provider: Address) -> Option<ProviderRecord> {
        provider::load(&env, &provider)
    }

    /// `false` when the provider is not registered.
    pub fn is_provider_active(env: Env, provider: Address) -> bool {
        provider::is_active(&env, &provider)
    }

    // ======================== Authorization ========================

    /// Whether `provider` is on `patient`'s authorized list.
    pub fn is_authorized(env: Env, patient: Address, provider: Address) -> bool {
        authorization::is_authorized(&env, &patient, &provider)
    }

    /// Authorize a provider to manage the calling patient's prescriptions.
    pub fn authorize_provider(
        env: Env,
        patient: Address,
        provider: Address,
    ) -> Result<(), ContractError> {
        patient.require_auth();

        let count = authorization::authorize_provider(&env, &patient, &provider)?;

        events::publish_provider_authorized(&env, patient, provider, count);
        Ok(())
    }

    /// Authorized providers of `patient`, in the order they were added.
    pub fn get_authorized_providers(env: Env, patient: Address) -> Vec<Address> {
        authorization::authorized_providers(&env, &patient)
    }

    // ======================== Prescriptions ========================

    /// Issue a prescription for `patient`. Returns the new prescription id.
    pub fn create_prescription(
        env: Env,
        provider: Address,
        patient: Address,
        medication: String,
        dosage: String,
        start_ts: u64,
        end_ts: u64,
    ) -> Result<u64, ContractError> {
        provider.require_auth();

        let rx = prescription::create(
            &env,
            &provider,
            NewPrescription {
                patient,
                medication,
                dosage,
                start_ts,
                end_ts,
            },
        )?;

        events::publish_prescription_created(
            &env,
            rx.id,
            rx.patient,
            rx.provider,
            rx.start_ts,
            rx.end_ts,
        );
        Ok(rx.id)
    }

    pub fn get_prescription(env: Env, prescription_id: u64) -> Option<Prescription> {
        prescription::get(&env, prescription_id)
    }

    /// Deactivate a prescription. Only its provider or its patient may call
    /// this; deactivating an inactive prescription succeeds without effect.
    pub fn deactivate_prescription(
        env: Env,
        caller: Address,
        prescription_id: u64,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        if let Some(rx) = prescription::deactivate(&env, &caller, prescription_id)? {
            events::publish_prescription_deactivated(&env, rx.id, rx.patient, caller);
        }
        Ok(())
    }

    /// Active prescription ids of `patient`, in creation order.
    pub fn get_active_prescriptions_for(env: Env, patient: Address) -> Vec<u64> {
        prescription::active_for(&env, &patient)
    }

    /// Every prescription id ever created, in creation order.
    pub fn get_prescription_index(env: Env) -> Vec<u64> {
        prescription::index(&env)
    }

    /// Number of prescriptions created so far (also the next id).
    pub fn get_prescription_count(env: Env) -> u64 {
        prescription::next_id(&env)
    }

    // ======================== Metadata ========================

    pub fn limits() -> RegistryLimits {
        RegistryLimits::current()
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}
