//! Shared storage helpers for the prescription registry contracts.
//!
//! This crate provides:
//! - [`bounded`]: fixed-capacity list appends with typed overflow errors.
//! - [`text`]: length checks for bounded text fields.
//! - [`ttl`]: persistent and instance storage TTL extension.
//!
//! Nothing here performs authorization; callers enforce `require_auth`
//! before touching storage.

#![no_std]

pub mod bounded;
pub mod text;
pub mod ttl;

pub use bounded::{is_full, push_bounded, push_unique_bounded, BoundedListError};
pub use text::is_within_bounds;
