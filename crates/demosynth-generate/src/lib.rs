//! Random population synthesis for demosynth.
//!
//! This crate produces `Person` records with correlated financial fields
//! and a declaration group derived from the issued id. Generation is
//! ChaCha-driven: the default synthesizer seeds from OS entropy, and tests
//! pin a seed for reproducible collections.

pub mod ids;
pub mod scalars;
pub mod synthesizer;

pub use ids::IdSequence;
pub use synthesizer::Synthesizer;
