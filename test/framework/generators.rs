//! # Property-Based Test Generators
//!
//! Composable `proptest` strategies for generating valid and adversarial inputs
//! across all prescription registry operations.
//!
//! ## Design Decisions
//!
//! - Generators produce *semantic* values (text lengths, validity windows,
//!   party indices), not raw bytes, so tests exercise real code paths rather
//!   than hitting deserialization errors.
//! - Roughly a fifth of text lengths land on a boundary (0, 1, max, max + 1).
//! - Action sequences reuse a small pool of parties so duplicates, full
//!   provider lists and cross-patient calls show up in short runs.

extern crate std;

use proptest::prelude::*;
use std::vec::Vec;

// ── Scalar Generators ────────────────────────────────────────────────────────

/// Strategy for text lengths against a limit of `max`, biased toward bounds.
///
/// Distribution:
///   10% → 0 (always rejected)
///   5%  → 1
///   5%  → max
///   10% → max + 1 (always rejected)
///   70% → uniform in [1, max]
pub fn text_len_strategy(max: u32) -> impl Strategy<Value = u32> {
    prop_oneof![
        2 => Just(0u32),
        1 => Just(1u32),
        1 => Just(max),
        2 => Just(max + 1),
        14 => (1u32..=max),
    ]
}

/// Strategy for lengths that always pass a limit of `max`.
pub fn valid_text_len_strategy(max: u32) -> impl Strategy<Value = u32> {
    prop_oneof![
        1 => Just(1u32),
        1 => Just(max),
        8 => (1u32..=max),
    ]
}

/// Strategy for timestamps.
pub fn timestamp_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![
        1 => Just(0u64),
        8 => (0u64..=31_536_000u64),    // up to 1 year of seconds
        1 => Just(u64::MAX / 2),
    ]
}

/// Strategy for time durations in seconds.
pub fn duration_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![
        1 => Just(0u64),
        1 => Just(1u64),
        3 => (1u64..=86_400u64),        // up to 1 day
        2 => (1u64..=2_592_000u64),     // up to 30 days
    ]
}

/// Strategy for `(start, end)` validity windows.
///
/// Mostly well-formed, with empty and inverted windows mixed in.
pub fn window_strategy() -> impl Strategy<Value = (u64, u64)> {
    prop_oneof![
        7 => (timestamp_strategy(), 1u64..=2_592_000u64)
            .prop_map(|(start, len)| (start, start.saturating_add(len))),
        2 => timestamp_strategy().prop_map(|t| (t, t)),
        1 => (timestamp_strategy(), 1u64..=86_400u64)
            .prop_map(|(end, back)| (end.saturating_add(back), end)),
    ]
}

/// Strategy for windows that always satisfy `start < end`.
pub fn valid_window_strategy() -> impl Strategy<Value = (u64, u64)> {
    (0u64..=31_536_000u64, 1u64..=2_592_000u64).prop_map(|(start, len)| (start, start + len))
}

// ── Action Generators ────────────────────────────────────────────────────────

/// Who attempts a deactivation.
///
/// Indices select from the explorer's patient or provider pool; `Stranger`
/// is a fresh address with no relation to anything.
#[derive(Debug, Clone)]
pub enum Actor {
    Patient(usize),
    Provider(usize),
    Stranger,
}

/// Enumeration of all registry actions for state exploration.
///
/// Each variant carries the minimal data needed to execute the action.
/// Indices select from fixed party pools (modular indexing).
#[derive(Debug, Clone)]
pub enum RegistryAction {
    RegisterPatient { patient_index: usize },
    RegisterProvider { provider_index: usize },
    AuthorizeProvider { patient_index: usize, provider_index: usize },
    CreatePrescription {
        provider_index: usize,
        patient_index: usize,
        start: u64,
        end: u64,
    },
    DeactivatePrescription { actor: Actor, prescription_id: u64 },
    AdvanceTime { delta: u64 },
}

pub fn actor_strategy(num_patients: usize, num_providers: usize) -> impl Strategy<Value = Actor> {
    prop_oneof![
        4 => (0..num_patients).prop_map(Actor::Patient),
        5 => (0..num_providers).prop_map(Actor::Provider),
        1 => Just(Actor::Stranger),
    ]
}

/// Strategy for individual registry actions.
///
/// Weights favour authorization and prescribing; registrations settle early
/// because repeats only produce duplicate errors.
pub fn registry_action_strategy(
    num_patients: usize,
    num_providers: usize,
) -> impl Strategy<Value = RegistryAction> {
    let patient_idx = 0..num_patients;
    let provider_idx = 0..num_providers;

    prop_oneof![
        10 => patient_idx.clone().prop_map(|p| RegistryAction::RegisterPatient { patient_index: p }),
        10 => provider_idx.clone().prop_map(|p| RegistryAction::RegisterProvider { provider_index: p }),
        20 => (patient_idx.clone(), provider_idx.clone()).prop_map(|(pa, pr)| {
            RegistryAction::AuthorizeProvider { patient_index: pa, provider_index: pr }
        }),
        30 => (provider_idx, patient_idx, window_strategy()).prop_map(|(pr, pa, (start, end))| {
            RegistryAction::CreatePrescription {
                provider_index: pr,
                patient_index: pa,
                start,
                end,
            }
        }),
        20 => (actor_strategy(num_patients, num_providers), 0u64..=12u64).prop_map(|(actor, id)| {
            RegistryAction::DeactivatePrescription { actor, prescription_id: id }
        }),
        10 => duration_strategy().prop_map(|d| RegistryAction::AdvanceTime { delta: d }),
    ]
}

/// Strategy for a sequence of registry actions.
///
/// Produces 1 to `max_len` actions.
pub fn registry_action_sequence(
    num_patients: usize,
    num_providers: usize,
    max_len: usize,
) -> impl Strategy<Value = Vec<RegistryAction>> {
    prop::collection::vec(
        registry_action_strategy(num_patients, num_providers),
        1..=max_len,
    )
}

// ── Mutation Testing Support ─────────────────────────────────────────────────

/// A semantic corruption of otherwise valid prescription input.
///
/// Each mutation must be rejected by the contract; a mutation that slips
/// through means validation has a hole.
#[derive(Debug, Clone)]
pub enum Mutation {
    /// Set `end` equal to `start`.
    CollapseWindow,
    /// Swap `start` and `end`.
    InvertWindow,
    /// Empty the medication name.
    EmptyText,
    /// Push the medication name one past its limit.
    OversizeText,
}

/// Strategy for selecting a mutation.
pub fn mutation_strategy() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        Just(Mutation::CollapseWindow),
        Just(Mutation::InvertWindow),
        Just(Mutation::EmptyText),
        Just(Mutation::OversizeText),
    ]
}

/// Apply a mutation to a validity window.
pub fn mutate_window(start: u64, end: u64, mutation: &Mutation) -> (u64, u64) {
    match mutation {
        Mutation::CollapseWindow => (start, start),
        Mutation::InvertWindow => (end, start),
        _ => (start, end), // Text mutations pass through
    }
}

/// Apply a mutation to a text length against a limit of `max`.
pub fn mutate_text_len(len: u32, max: u32, mutation: &Mutation) -> u32 {
    match mutation {
        Mutation::EmptyText => 0,
        Mutation::OversizeText => max + 1,
        _ => len,
    }
}

// ── Care Pattern Generators ──────────────────────────────────────────────────

/// Common real-world care flows, expressed as action sequences.
///
/// Patterns register their own parties so they run on a fresh contract.
#[derive(Debug, Clone)]
pub enum CarePattern {
    /// One patient, one provider, one prescription that is later stopped.
    SingleVisit,
    /// A patient tries to grow their care team past the provider limit.
    CrowdedCareTeam,
    /// A chronic patient receives repeat prescriptions over months.
    RepeatPrescriptions,
    /// Someone outside the care relationship interferes.
    ThirdPartyInterference,
}

/// Generate a concrete action sequence from a care pattern.
pub fn pattern_to_actions(pattern: &CarePattern, num_providers: usize) -> Vec<RegistryAction> {
    use RegistryAction::*;

    match pattern {
        CarePattern::SingleVisit => {
            vec![
                RegisterPatient { patient_index: 0 },
                RegisterProvider { provider_index: 0 },
                AuthorizeProvider { patient_index: 0, provider_index: 0 },
                CreatePrescription { provider_index: 0, patient_index: 0, start: 100, end: 1_000 },
                AdvanceTime { delta: 500 },
                DeactivatePrescription { actor: Actor::Provider(0), prescription_id: 0 },
            ]
        }
        CarePattern::CrowdedCareTeam => {
            let mut actions = vec![RegisterPatient { patient_index: 0 }];
            for i in 0..num_providers {
                actions.push(RegisterProvider { provider_index: i });
                actions.push(AuthorizeProvider { patient_index: 0, provider_index: i });
            }
            for i in 0..num_providers {
                actions.push(CreatePrescription {
                    provider_index: i,
                    patient_index: 0,
                    start: 0,
                    end: 86_400,
                });
            }
            actions
        }
        CarePattern::RepeatPrescriptions => {
            let mut actions = vec![
                RegisterPatient { patient_index: 0 },
                RegisterProvider { provider_index: 0 },
                AuthorizeProvider { patient_index: 0, provider_index: 0 },
            ];
            for month in 0..12u64 {
                let start = month * 2_592_000;
                actions.push(CreatePrescription {
                    provider_index: 0,
                    patient_index: 0,
                    start,
                    end: start + 2_592_000,
                });
                if month > 0 {
                    actions.push(DeactivatePrescription {
                        actor: Actor::Patient(0),
                        prescription_id: month - 1,
                    });
                }
                actions.push(AdvanceTime { delta: 2_592_000 });
            }
            actions
        }
        CarePattern::ThirdPartyInterference => {
            vec![
                RegisterPatient { patient_index: 0 },
                RegisterPatient { patient_index: 1 },
                RegisterProvider { provider_index: 0 },
                RegisterProvider { provider_index: 1 },
                AuthorizeProvider { patient_index: 0, provider_index: 0 },
                CreatePrescription { provider_index: 1, patient_index: 0, start: 0, end: 10 },
                CreatePrescription { provider_index: 0, patient_index: 0, start: 0, end: 10 },
                CreatePrescription { provider_index: 0, patient_index: 1, start: 0, end: 10 },
                DeactivatePrescription { actor: Actor::Patient(1), prescription_id: 0 },
                DeactivatePrescription { actor: Actor::Provider(1), prescription_id: 0 },
                DeactivatePrescription { actor: Actor::Stranger, prescription_id: 0 },
            ]
        }
    }
}

/// Strategy that selects a care pattern.
pub fn care_pattern_strategy() -> impl Strategy<Value = CarePattern> {
    prop_oneof![
        Just(CarePattern::SingleVisit),
        Just(CarePattern::CrowdedCareTeam),
        Just(CarePattern::RepeatPrescriptions),
        Just(CarePattern::ThirdPartyInterference),
    ]
}
