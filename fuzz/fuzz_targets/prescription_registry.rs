#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use prescription_registry::types::{
    MAX_AUTHORIZED_PROVIDERS, MAX_INDEXED_PRESCRIPTIONS, MAX_PATIENT_PRESCRIPTIONS,
};
use prescription_registry::{PrescriptionRegistryContract, PrescriptionRegistryContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    Address, Env, String,
};

/// Actions covering every state-changing registry entry point.
///
/// Party fields index small pools so that duplicates, full provider lists
/// and cross-patient calls are reached quickly. Text lengths are raw bytes
/// so both sides of every bound get exercised.
#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    RegisterPatient { patient: u8, history_len: u16, profile_len: u16 },
    RegisterProvider { provider: u8, specialization_len: u8, license_len: u8 },
    Authorize { patient: u8, provider: u8 },
    Prescribe { provider: u8, patient: u8, medication_len: u8, dosage_len: u8, start: u32, end: u32 },
    Deactivate { by_patient: bool, party: u8, id: u8 },
    AdvanceTime { delta: u16 },
}

fn text(env: &Env, len: usize) -> String {
    String::from_str(env, &"a".repeat(len))
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(PrescriptionRegistryContract, ());
    let client = PrescriptionRegistryContractClient::new(&env, &contract_id);

    let patients: Vec<Address> = (0..3).map(|_| Address::generate(&env)).collect();
    let providers: Vec<Address> = (0..7).map(|_| Address::generate(&env)).collect();

    for action in actions.into_iter().take(64) {
        let count_before = client.get_prescription_count();

        match action {
            FuzzAction::RegisterPatient { patient, history_len, profile_len } => {
                let p = &patients[patient as usize % patients.len()];
                let _ = client.try_register_patient(
                    p,
                    &text(&env, history_len as usize % 300),
                    &text(&env, profile_len as usize % 300),
                );
            }
            FuzzAction::RegisterProvider { provider, specialization_len, license_len } => {
                let p = &providers[provider as usize % providers.len()];
                let _ = client.try_register_provider(
                    p,
                    &text(&env, specialization_len as usize % 80),
                    &text(&env, license_len as usize % 40),
                );
            }
            FuzzAction::Authorize { patient, provider } => {
                let _ = client.try_authorize_provider(
                    &patients[patient as usize % patients.len()],
                    &providers[provider as usize % providers.len()],
                );
            }
            FuzzAction::Prescribe { provider, patient, medication_len, dosage_len, start, end } => {
                let result = client.try_create_prescription(
                    &providers[provider as usize % providers.len()],
                    &patients[patient as usize % patients.len()],
                    &text(&env, medication_len as usize % 80),
                    &text(&env, dosage_len as usize % 40),
                    &(start as u64),
                    &(end as u64),
                );
                if let Ok(Ok(id)) = result {
                    assert_eq!(id, count_before, "INVARIANT VIOLATION: id skipped");
                    assert!(start < end, "INVARIANT VIOLATION: accepted empty window");
                }
            }
            FuzzAction::Deactivate { by_patient, party, id } => {
                let caller = if by_patient {
                    &patients[party as usize % patients.len()]
                } else {
                    &providers[party as usize % providers.len()]
                };
                let id = id as u64 % 16;
                let was_active = client.get_prescription(&id).map(|rx| rx.is_active);
                let result = client.try_deactivate_prescription(caller, &id);
                if result.is_ok() {
                    let rx = client.get_prescription(&id).expect("deactivated id exists");
                    assert!(!rx.is_active);
                    if was_active == Some(true) {
                        assert_eq!(rx.deactivated_by.as_ref(), Some(caller));
                    }
                }
            }
            FuzzAction::AdvanceTime { delta } => {
                let ts = env.ledger().timestamp().saturating_add(delta as u64);
                env.ledger().set_timestamp(ts);
            }
        }

        // ── Post-action invariant checks ──
        let index = client.get_prescription_index();
        let count = client.get_prescription_count();
        assert!(count == count_before || count == count_before + 1);
        assert_eq!(index.len() as u64, count, "INVARIANT VIOLATION: counter != index length");
        assert!(index.len() <= MAX_INDEXED_PRESCRIPTIONS);

        for patient in &patients {
            let team = client.get_authorized_providers(patient);
            assert!(team.len() <= MAX_AUTHORIZED_PROVIDERS);
            for i in 0..team.len() {
                for j in (i + 1)..team.len() {
                    assert_ne!(team.get(i), team.get(j), "INVARIANT VIOLATION: duplicate provider");
                }
            }

            if let Some(record) = client.get_patient_record(patient) {
                assert!(record.prescriptions.len() <= MAX_PATIENT_PRESCRIPTIONS);
            }

            for id in client.get_active_prescriptions_for(patient).iter() {
                let rx = client.get_prescription(&id).expect("active id exists");
                assert!(rx.is_active && rx.patient == *patient);
            }
        }
    }
});
