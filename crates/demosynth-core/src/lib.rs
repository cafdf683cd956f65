//! Core contracts for demosynth.
//!
//! This crate defines the canonical `Person` record, the declaration-group
//! classification rule, the fixed reference lists the synthesizer draws
//! from, and the error type shared across crates.

pub mod error;
pub mod group;
pub mod person;
pub mod reference;

pub use error::{Error, Result};
pub use group::{DeclarationGroup, classify_id, verify_group};
pub use person::Person;
pub use reference::{CITIES, FEMALE_FIRST_NAMES, MALE_FIRST_NAMES, SURNAMES, is_valid_city};

/// Fixed reference year for age derivation. Ages are relative to this
/// constant, never to the wall clock, so generated data stays stable.
pub const REFERENCE_YEAR: i32 = 2025;
