#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env, String};

/// Event published when a patient registers.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRegisteredEvent {
    pub patient: Address,
    pub timestamp: u64,
}

/// Event published when a provider registers.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderRegisteredEvent {
    pub provider: Address,
    pub specialization: String,
    pub license_id: String,
    pub timestamp: u64,
}

/// Event published when a patient authorizes a provider.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderAuthorizedEvent {
    pub patient: Address,
    pub provider: Address,
    pub authorized_count: u32,
    pub timestamp: u64,
}

/// Event published when a prescription is issued.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrescriptionCreatedEvent {
    pub prescription_id: u64,
    pub patient: Address,
    pub provider: Address,
    pub start_ts: u64,
    pub end_ts: u64,
    pub timestamp: u64,
}

/// Event published when a prescription becomes inactive.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrescriptionDeactivatedEvent {
    pub prescription_id: u64,
    pub patient: Address,
    pub deactivated_by: Address,
    pub timestamp: u64,
}

/// Publishes an event when a patient record is created.
pub fn publish_patient_registered(env: &Env, patient: Address) {
    let topics = (symbol_short!("PAT_REG"), patient.clone());
    let data = PatientRegisteredEvent {
        patient,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a provider record is created.
/// This event includes the specialization and license identifier.
pub fn publish_provider_registered(
    env: &Env,
    provider: Address,
    specialization: String,
    license_id: String,
) {
    let topics = (symbol_short!("PROV_REG"), provider.clone());
    let data = ProviderRegisteredEvent {
        provider,
        specialization,
        license_id,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a provider joins a patient's authorized list.
pub fn publish_provider_authorized(
    env: &Env,
    patient: Address,
    provider: Address,
    authorized_count: u32,
) {
    let topics = (symbol_short!("PROV_AUTH"), patient.clone(), provider.clone());
    let data = ProviderAuthorizedEvent {
        patient,
        provider,
        authorized_count,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a prescription is created.
/// Medication and dosage text stay out of the event payload.
pub fn publish_prescription_created(
    env: &Env,
    prescription_id: u64,
    patient: Address,
    provider: Address,
    start_ts: u64,
    end_ts: u64,
) {
    let topics = (symbol_short!("RX_NEW"), patient.clone(), provider.clone());
    let data = PrescriptionCreatedEvent {
        prescription_id,
        patient,
        provider,
        start_ts,
        end_ts,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_prescription_deactivated(
    env: &Env,
    prescription_id: u64,
    patient: Address,
    deactivated_by: Address,
) {
    let topics = (symbol_short!("RX_OFF"), patient.clone(), deactivated_by.clone());
    let data = PrescriptionDeactivatedEvent {
        prescription_id,
        patient,
        deactivated_by,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
