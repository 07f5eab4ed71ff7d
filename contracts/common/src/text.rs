use soroban_sdk::String;

/// Returns `true` when `value` is non-empty and at most `max_len` bytes long.
pub fn is_within_bounds(value: &String, max_len: u32) -> bool {
    let len = value.len();
    len >= 1 && len <= max_len
}
