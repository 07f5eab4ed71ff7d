//! Fixed-capacity, insertion-ordered lists on top of `soroban_sdk::Vec`.
//!
//! Soroban vectors grow without limit, so every list whose size is part of a
//! contract invariant goes through these helpers. A full list is reported as
//! a typed error instead of being silently truncated.

use soroban_sdk::{Env, IntoVal, TryFromVal, Val, Vec};

/// Reasons an append to a bounded list can be refused.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BoundedListError {
    /// The list already holds `capacity` entries.
    Full,
    /// The item is already present in a list that must stay duplicate-free.
    Duplicate,
}

/// Returns `true` when `list` has no room left under `capacity`.
pub fn is_full<T>(list: &Vec<T>, capacity: u32) -> bool
where
    T: IntoVal<Env, Val> + TryFromVal<Env, Val>,
{
    list.len() >= capacity
}

/// Appends `item` to the back of `list` unless the list is already full.
pub fn push_bounded<T>(list: &mut Vec<T>, item: T, capacity: u32) -> Result<(), BoundedListError>
where
    T: IntoVal<Env, Val> + TryFromVal<Env, Val>,
{
    if is_full(list, capacity) {
        return Err(BoundedListError::Full);
    }
    list.push_back(item);
    Ok(())
}

/// Appends `item` while keeping `list` duplicate-free and within `capacity`.
///
/// Capacity is checked first: a full list reports [`BoundedListError::Full`]
/// even when `item` is already present.
pub fn push_unique_bounded<T>(
    list: &mut Vec<T>,
    item: T,
    capacity: u32,
) -> Result<(), BoundedListError>
where
    T: IntoVal<Env, Val> + TryFromVal<Env, Val> + PartialEq + Clone,
{
    if is_full(list, capacity) {
        return Err(BoundedListError::Full);
    }
    if list.iter().any(|existing| existing == item) {
        return Err(BoundedListError::Duplicate);
    }
    list.push_back(item);
    Ok(())
}
